//! Built-in word pool, grouped by theme. Roughly a year of distinct daily words.

pub const BUILTIN_POOL: &[&str] = &[
    // Emotions & feelings
    "love", "joy", "sadness", "fear", "anger", "calm", "hope", "worry", "longing", "excitement",
    "jealousy", "pride", "shame", "guilt", "gratitude", "regret", "surprise", "curiosity", "boredom", "relief",
    "grief", "delight", "disgust", "envy", "loneliness", "frustration", "fatigue", "serenity", "awe", "desire",
    "comfort", "nostalgia", "despair", "passion", "affection", "anxiety", "panic", "contentment", "sorrow", "courage",
    // Abstract concepts
    "freedom", "justice", "truth", "beauty", "wisdom", "power", "chaos", "order", "faith", "illusion",
    "fate", "reality", "meaning", "purpose", "balance", "harmony", "memory", "silence", "moment", "infinity",
    "destiny", "spirit", "mystery", "logic", "value", "identity", "culture", "tradition", "progress", "change",
    "equality", "peace", "knowledge", "success", "failure", "legacy", "dream", "growth", "emptiness", "myth",
    "origin", "essence", "paradox", "symbol", "energy", "vision", "virtue", "honor", "luck", "danger",
    // Qualities & attributes
    "kindness", "honesty", "patience", "strength", "gentleness", "humility", "creativity", "loyalty", "generosity", "ambition",
    "simplicity", "elegance", "clarity", "grace", "stubbornness", "modesty", "bravery", "charm", "innocence", "cruelty",
    "freshness", "depth", "softness", "hardness", "sharpness", "warmth", "coldness", "brightness", "darkness", "stillness",
    "speed", "weight", "height", "loudness", "purity", "richness", "rarity", "fragility", "sincerity", "diligence",
    // Knowledge & learning
    "science", "education", "philosophy", "history", "language", "mathematics", "music", "literature", "art", "poetry",
    "theory", "research", "experiment", "discovery", "invention", "question", "answer", "lesson", "teacher", "student",
    "library", "book", "story", "idea", "thought", "insight", "intuition", "reason", "argument", "evidence",
    "method", "puzzle", "riddle", "lecture", "curriculum",
    // Social & relationships
    "family", "friendship", "community", "neighbor", "partner", "marriage", "child", "parent", "sibling", "stranger",
    "society", "nation", "city", "village", "leader", "citizen", "tribe", "crowd", "team", "alliance",
    "trust", "betrayal", "promise", "agreement", "conflict", "cooperation", "competition", "gift", "celebration", "wedding",
    "funeral", "greeting", "farewell", "reunion", "hospitality", "respect", "empathy", "kinship", "rivalry", "loyalist",
    // Nature & physical world
    "ocean", "sun", "moon", "star", "sky", "forest", "river", "mountain", "desert", "valley",
    "rain", "snow", "wind", "storm", "thunder", "lightning", "cloud", "fire", "water", "earth",
    "tree", "flower", "seed", "root", "leaf", "stone", "sand", "island", "volcano", "glacier",
    "horizon", "rainbow", "sunset", "dawn", "shadow",
    // Time & change
    "time", "hour", "day", "night", "morning", "evening", "week", "year", "century", "future",
    "past", "present", "era", "season", "spring", "summer", "autumn", "winter", "birth", "death",
    "youth", "age", "beginning", "ending", "cycle", "eternity", "instant", "deadline", "anniversary", "twilight",
    // Actions & states
    "movement", "rest", "journey", "search", "escape", "return", "struggle", "victory", "defeat", "creation",
    "destruction", "rebellion", "revolution", "healing", "sleep", "awakening", "departure", "arrival", "waiting", "wandering",
    "building", "dance", "song", "play", "work", "prayer", "hunt", "harvest", "voyage", "sacrifice",
];
