//! Pokemon type system and weakness chart

/// Pokemon types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// All 18 Pokemon types
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Attacking types that are super effective against this type, in
    /// chart order
    pub fn weak_to(&self) -> &'static [Type] {
        WEAKNESS_CHART[*self as usize]
    }

    /// Parse from an API type name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "electric" => Some(Type::Electric),
            "grass" => Some(Type::Grass),
            "ice" => Some(Type::Ice),
            "fighting" => Some(Type::Fighting),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "flying" => Some(Type::Flying),
            "psychic" => Some(Type::Psychic),
            "bug" => Some(Type::Bug),
            "rock" => Some(Type::Rock),
            "ghost" => Some(Type::Ghost),
            "dragon" => Some(Type::Dragon),
            "dark" => Some(Type::Dark),
            "steel" => Some(Type::Steel),
            "fairy" => Some(Type::Fairy),
            _ => None,
        }
    }

    /// Canonical string representation (the lowercase API spelling)
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Electric => "electric",
            Type::Grass => "grass",
            Type::Ice => "ice",
            Type::Fighting => "fighting",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Flying => "flying",
            Type::Psychic => "psychic",
            Type::Bug => "bug",
            Type::Rock => "rock",
            Type::Ghost => "ghost",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Steel => "steel",
            Type::Fairy => "fairy",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weakness chart: for each defending type, the attacking types that deal
/// bonus damage to it.
///
/// Row index = defending type discriminant. Row contents and row-internal
/// order are fixed and load-bearing: weakness listings preserve this order.
/// The chart is not irreflexive (Ghost is weak to Ghost).
#[rustfmt::skip]
pub static WEAKNESS_CHART: [&[Type]; 18] = [
    // Normal defending
    &[Type::Fighting],
    // Fire defending
    &[Type::Water, Type::Ground, Type::Rock],
    // Water defending
    &[Type::Electric, Type::Grass],
    // Electric defending
    &[Type::Ground],
    // Grass defending
    &[Type::Fire, Type::Ice, Type::Poison, Type::Flying, Type::Bug],
    // Ice defending
    &[Type::Fire, Type::Fighting, Type::Rock, Type::Steel],
    // Fighting defending
    &[Type::Flying, Type::Psychic, Type::Fairy],
    // Poison defending
    &[Type::Ground, Type::Psychic],
    // Ground defending
    &[Type::Water, Type::Grass, Type::Ice],
    // Flying defending
    &[Type::Electric, Type::Ice, Type::Rock],
    // Psychic defending
    &[Type::Bug, Type::Ghost, Type::Dark],
    // Bug defending
    &[Type::Fire, Type::Flying, Type::Rock],
    // Rock defending
    &[Type::Water, Type::Grass, Type::Fighting, Type::Ground, Type::Steel],
    // Ghost defending
    &[Type::Ghost, Type::Dark],
    // Dragon defending
    &[Type::Ice, Type::Dragon, Type::Fairy],
    // Dark defending
    &[Type::Fighting, Type::Bug, Type::Fairy],
    // Steel defending
    &[Type::Fire, Type::Fighting, Type::Ground],
    // Fairy defending
    &[Type::Poison, Type::Steel],
];
