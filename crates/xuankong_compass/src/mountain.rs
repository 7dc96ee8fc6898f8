//! The 24-mountain ring of the luopan compass.
//!
//! The full circle is divided into 24 equal mountains of 15 degrees each,
//! centered on multiples of 15 with 子 (Zi) at due north. Every mountain
//! carries two tags that drive the facing resolver: a dragon category
//! (earth, sky or human: the position within its trigram) and a yin/yang
//! polarity that decides whether a star flies forward or reversed.
//!
//! Clean-room implementation from standard luopan convention.

use crate::angle::{normalize_angle, signed_deviation};
use crate::trigram::Trigram;

/// The 24 mountains in ring order (index 0 = 子 = due north).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mountain {
    Zi,
    Gui,
    Chou,
    Gen,
    Yin,
    Jia,
    Mao,
    Yi,
    Chen,
    Xun,
    Si,
    Bing,
    Wu,
    Ding,
    Wei,
    Kun,
    Shen,
    Geng,
    You,
    Xin,
    Xu,
    Qian,
    Hai,
    Ren,
}

/// All 24 mountains in ring order.
pub const ALL_MOUNTAINS: [Mountain; 24] = [
    Mountain::Zi,
    Mountain::Gui,
    Mountain::Chou,
    Mountain::Gen,
    Mountain::Yin,
    Mountain::Jia,
    Mountain::Mao,
    Mountain::Yi,
    Mountain::Chen,
    Mountain::Xun,
    Mountain::Si,
    Mountain::Bing,
    Mountain::Wu,
    Mountain::Ding,
    Mountain::Wei,
    Mountain::Kun,
    Mountain::Shen,
    Mountain::Geng,
    Mountain::You,
    Mountain::Xin,
    Mountain::Xu,
    Mountain::Qian,
    Mountain::Hai,
    Mountain::Ren,
];

/// Dragon category of a mountain: its position within the owning trigram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dragon {
    /// 地元龍, the leading mountain of each trigram.
    Earth,
    /// 天元龍, the central mountain of each trigram.
    Sky,
    /// 人元龍, the trailing mountain of each trigram.
    Human,
}

impl Dragon {
    /// Slot of this dragon in [`Trigram::mountains`] (`[earth, sky, human]`).
    pub const fn slot(self) -> usize {
        match self {
            Self::Earth => 0,
            Self::Sky => 1,
            Self::Human => 2,
        }
    }
}

/// Yin/yang polarity of a mountain. Yang flies forward, yin reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Mountain {
    /// Pinyin name of the mountain.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Gui => "Gui",
            Self::Chou => "Chou",
            Self::Gen => "Gen",
            Self::Yin => "Yin",
            Self::Jia => "Jia",
            Self::Mao => "Mao",
            Self::Yi => "Yi",
            Self::Chen => "Chen",
            Self::Xun => "Xun",
            Self::Si => "Si",
            Self::Bing => "Bing",
            Self::Wu => "Wu",
            Self::Ding => "Ding",
            Self::Wei => "Wei",
            Self::Kun => "Kun",
            Self::Shen => "Shen",
            Self::Geng => "Geng",
            Self::You => "You",
            Self::Xin => "Xin",
            Self::Xu => "Xu",
            Self::Qian => "Qian",
            Self::Hai => "Hai",
            Self::Ren => "Ren",
        }
    }

    /// Chinese character of the mountain, as shown on the luopan ring.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Gui => "癸",
            Self::Chou => "丑",
            Self::Gen => "艮",
            Self::Yin => "寅",
            Self::Jia => "甲",
            Self::Mao => "卯",
            Self::Yi => "乙",
            Self::Chen => "辰",
            Self::Xun => "巽",
            Self::Si => "巳",
            Self::Bing => "丙",
            Self::Wu => "午",
            Self::Ding => "丁",
            Self::Wei => "未",
            Self::Kun => "坤",
            Self::Shen => "申",
            Self::Geng => "庚",
            Self::You => "酉",
            Self::Xin => "辛",
            Self::Xu => "戌",
            Self::Qian => "乾",
            Self::Hai => "亥",
            Self::Ren => "壬",
        }
    }

    /// 0-based ring index (Zi=0 .. Ren=23).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Gui => 1,
            Self::Chou => 2,
            Self::Gen => 3,
            Self::Yin => 4,
            Self::Jia => 5,
            Self::Mao => 6,
            Self::Yi => 7,
            Self::Chen => 8,
            Self::Xun => 9,
            Self::Si => 10,
            Self::Bing => 11,
            Self::Wu => 12,
            Self::Ding => 13,
            Self::Wei => 14,
            Self::Kun => 15,
            Self::Shen => 16,
            Self::Geng => 17,
            Self::You => 18,
            Self::Xin => 19,
            Self::Xu => 20,
            Self::Qian => 21,
            Self::Hai => 22,
            Self::Ren => 23,
        }
    }

    /// Mountain at a ring index; indices wrap modulo 24.
    pub const fn from_index(index: i32) -> Mountain {
        ALL_MOUNTAINS[index.rem_euclid(24) as usize]
    }

    /// Center bearing of this mountain in degrees (`index * 15`).
    pub const fn center_deg(self) -> f64 {
        self.index() as f64 * 15.0
    }

    /// Mountain containing a compass bearing.
    ///
    /// Each mountain spans `[center - 7.5, center + 7.5)`; a bearing exactly
    /// on the upper boundary belongs to the next mountain.
    pub fn from_angle(deg: f64) -> Mountain {
        let idx = ((normalize_angle(deg) + 7.5) / 15.0).floor() as i32;
        Self::from_index(idx)
    }

    /// Diametrically opposite mountain: the sitting mountain of a house
    /// that faces this one.
    pub const fn opposite(self) -> Mountain {
        Self::from_index(self.index() as i32 + 12)
    }

    /// Owning trigram: three adjacent mountains per trigram, with Kan
    /// wrapping across north (壬子癸).
    pub const fn trigram(self) -> Trigram {
        match self {
            Self::Ren | Self::Zi | Self::Gui => Trigram::Kan,
            Self::Chou | Self::Gen | Self::Yin => Trigram::Gen,
            Self::Jia | Self::Mao | Self::Yi => Trigram::Zhen,
            Self::Chen | Self::Xun | Self::Si => Trigram::Xun,
            Self::Bing | Self::Wu | Self::Ding => Trigram::Li,
            Self::Wei | Self::Kun | Self::Shen => Trigram::Kun,
            Self::Geng | Self::You | Self::Xin => Trigram::Dui,
            Self::Xu | Self::Qian | Self::Hai => Trigram::Qian,
        }
    }

    /// Dragon category. The ring interleaves the three categories: sky
    /// dragons sit at indices 0, 3, 6, .., human at 1, 4, 7, .., earth at
    /// 2, 5, 8, ...
    pub const fn dragon(self) -> Dragon {
        match self.index() % 3 {
            0 => Dragon::Sky,
            1 => Dragon::Human,
            _ => Dragon::Earth,
        }
    }

    /// Yin/yang polarity.
    ///
    /// Within each dragon octet (taken in ascending ring order) the first
    /// four mountains are yang and the last four yin, which splits the ring
    /// into a yang half (indices 0..11) and a yin half (12..23).
    pub const fn polarity(self) -> Polarity {
        if self.index() < 12 { Polarity::Yang } else { Polarity::Yin }
    }
}

/// Sub-facing (兼向) detection.
///
/// Computes the shortest signed deviation of `angle` from `mountain`'s
/// center. On-center bearings (|deviation| <= `threshold_deg`) have no
/// sub-facing. Otherwise the bearing leans into the Jian zone and the
/// adjacent mountain in the direction of the lean is returned.
///
/// A deviation beyond 7.5 degrees cannot occur when `mountain` is the
/// bearing's own mountain; it is handled as "no sub-facing" rather than
/// panicking so a stale pairing from a caller degrades safely.
pub fn jian_neighbor(angle: f64, mountain: Mountain, threshold_deg: f64) -> Option<Mountain> {
    let dev = signed_deviation(normalize_angle(angle), mountain.center_deg());
    if dev.abs() <= threshold_deg || dev.abs() > 7.5 {
        return None;
    }
    let step = if dev > 0.0 { 1 } else { -1 };
    Some(Mountain::from_index(mountain.index() as i32 + step))
}
