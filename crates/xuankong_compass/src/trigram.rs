//! The 8 trigrams (gua) of the post-heaven arrangement.
//!
//! Each trigram owns three adjacent mountains of the 24-mountain ring and
//! serves as the "home palace" of one Lo Shu star (star 5 has no home and
//! borrows the palace it occupies).
//!
//! Clean-room implementation from standard Xuan Kong convention.

use crate::mountain::Mountain;

/// The 8 trigrams in ring order starting from Kan (north).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigram {
    Kan,
    Gen,
    Zhen,
    Xun,
    Li,
    Kun,
    Dui,
    Qian,
}

/// All 8 trigrams in order (index 0 = Kan).
pub const ALL_TRIGRAMS: [Trigram; 8] = [
    Trigram::Kan,
    Trigram::Gen,
    Trigram::Zhen,
    Trigram::Xun,
    Trigram::Li,
    Trigram::Kun,
    Trigram::Dui,
    Trigram::Qian,
];

impl Trigram {
    /// Pinyin name of the trigram.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kan => "Kan",
            Self::Gen => "Gen",
            Self::Zhen => "Zhen",
            Self::Xun => "Xun",
            Self::Li => "Li",
            Self::Kun => "Kun",
            Self::Dui => "Dui",
            Self::Qian => "Qian",
        }
    }

    /// Chinese character of the trigram.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Kan => "坎",
            Self::Gen => "艮",
            Self::Zhen => "震",
            Self::Xun => "巽",
            Self::Li => "離",
            Self::Kun => "坤",
            Self::Dui => "兌",
            Self::Qian => "乾",
        }
    }

    /// 0-based index (Kan=0 .. Qian=7).
    pub const fn index(self) -> u8 {
        match self {
            Self::Kan => 0,
            Self::Gen => 1,
            Self::Zhen => 2,
            Self::Xun => 3,
            Self::Li => 4,
            Self::Kun => 5,
            Self::Dui => 6,
            Self::Qian => 7,
        }
    }

    /// The three member mountains, ordered `[earth dragon, sky dragon, human dragon]`.
    pub const fn mountains(self) -> [Mountain; 3] {
        match self {
            Self::Kan => [Mountain::Ren, Mountain::Zi, Mountain::Gui],
            Self::Gen => [Mountain::Chou, Mountain::Gen, Mountain::Yin],
            Self::Zhen => [Mountain::Jia, Mountain::Mao, Mountain::Yi],
            Self::Xun => [Mountain::Chen, Mountain::Xun, Mountain::Si],
            Self::Li => [Mountain::Bing, Mountain::Wu, Mountain::Ding],
            Self::Kun => [Mountain::Wei, Mountain::Kun, Mountain::Shen],
            Self::Dui => [Mountain::Geng, Mountain::You, Mountain::Xin],
            Self::Qian => [Mountain::Xu, Mountain::Qian, Mountain::Hai],
        }
    }

    /// Home trigram of a Lo Shu star (1..9).
    ///
    /// Star 5 sits at the center of the Lo Shu and has no home trigram;
    /// it borrows the palace it occupies, so this returns `None` for 5
    /// (and for any value outside 1..9).
    pub const fn from_star(star: u8) -> Option<Trigram> {
        match star {
            1 => Some(Self::Kan),
            2 => Some(Self::Kun),
            3 => Some(Self::Zhen),
            4 => Some(Self::Xun),
            6 => Some(Self::Qian),
            7 => Some(Self::Dui),
            8 => Some(Self::Gen),
            9 => Some(Self::Li),
            _ => None,
        }
    }
}
