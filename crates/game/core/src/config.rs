/// Rule constants shared by every module of the engine.
///
/// The rule set is fixed: these values are not runtime-tunable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RulesConfig;

impl RulesConfig {
    // ===== character defaults =====
    pub const DEFAULT_ARMOR_CLASS: i32 = 10;
    pub const DEFAULT_HIT_POINTS: i32 = 5;
    pub const DEFAULT_LEVEL: u32 = 1;
    /// Highest reachable level. Keeps `level * XP_PER_LEVEL` and level hit points
    /// within their integer types.
    pub const MAX_LEVEL: u32 = 1_000_000;
    pub const DEFAULT_ABILITY_SCORE: i32 = 10;

    // ===== ability scores =====
    pub const MIN_ABILITY_SCORE: i32 = 1;
    pub const MAX_ABILITY_SCORE: i32 = 20;

    // ===== progression =====
    /// Hit points granted per level before the constitution modifier.
    pub const BASE_HIT_POINTS_PER_LEVEL: i32 = 5;
    /// Experience needed to leave a level is `level * XP_PER_LEVEL`.
    pub const XP_PER_LEVEL: u32 = 1000;
    /// Experience awarded to the attacker for every landed attack.
    pub const XP_PER_HIT: u32 = 10;

    // ===== combat =====
    pub const DIE_SIDES: u32 = 20;
    /// A natural roll of this value always hits.
    pub const CRITICAL_HIT: i32 = 20;
    pub const CRITICAL_MULTIPLIER: i32 = 2;
    /// Damage awarded when the modified roll meets the defense.
    pub const BASE_DAMAGE: i32 = 1;

    /// Returns true if `score` lies within the valid ability range.
    pub const fn is_valid_ability_score(score: i32) -> bool {
        score >= Self::MIN_ABILITY_SCORE && score <= Self::MAX_ABILITY_SCORE
    }

    /// Returns true if `level` lies within `[1, MAX_LEVEL]`.
    pub const fn is_valid_level(level: u32) -> bool {
        level >= 1 && level <= Self::MAX_LEVEL
    }
}
