//! Display languages: native digit glyphs and the fixed label table
//!
//! Buffers always hold ASCII digits. [`localize`] is applied when rendering
//! and [`delocalize`] when accepting typed input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Od,
    Hi,
    Bn,
    Mr,
    Gu,
    Te,
    Ta,
    Kn,
    Ml,
    Pa,
}

/// Fixed UI labels for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub calculator: &'static str,
    pub converter: &'static str,
    pub clear: &'static str,
    pub length: &'static str,
    pub weight: &'static str,
    pub temperature: &'static str,
    pub data: &'static str,
    pub error: &'static str,
    pub scientific: &'static str,
    pub history: &'static str,
}

const EN: Labels = Labels {
    calculator: "Calculator",
    converter: "Converter",
    clear: "AC",
    length: "Length",
    weight: "Weight",
    temperature: "Temp",
    data: "Data",
    error: "Error",
    scientific: "Scientific",
    history: "History",
};

const OD: Labels = Labels {
    calculator: "କାଲକୁଲେଟର",
    converter: "କନଭର୍ଟର",
    clear: "ସଫା",
    length: "ଦୈର୍ଘ୍ୟ",
    weight: "ଓଜନ",
    temperature: "ତାପମାତ୍ରା",
    data: "ଡାଟା",
    error: "ତ୍ରୁଟି",
    scientific: "ବୈଜ୍ଞାନିକ",
    history: "ଇତିହାସ",
};

const HI: Labels = Labels {
    calculator: "कैलकुलेटर",
    converter: "कन्वर्टर",
    clear: "साफ़",
    length: "लंबाई",
    weight: "वजन",
    temperature: "तापमान",
    data: "डेटा",
    error: "त्रुटि",
    scientific: "वैज्ञानिक",
    history: "इतिहास",
};

const BN: Labels = Labels {
    calculator: "ক্যালকুলেটর",
    converter: "কনভার্টার",
    clear: "মুছুন",
    length: "দৈর্ঘ্য",
    weight: "ওজন",
    temperature: "তাপমাত্রা",
    data: "ডেটা",
    error: "ত্রুটি",
    scientific: "বৈজ্ঞানিক",
    history: "ইতিহাস",
};

const MR: Labels = Labels {
    calculator: "कॅल्क्युलेटर",
    converter: "कन्व्हर्टर",
    clear: "साफ",
    length: "लांबी",
    weight: "वजन",
    temperature: "तापमान",
    data: "डेटा",
    error: "त्रुटी",
    scientific: "वैज्ञानिक",
    history: "इतिहास",
};

const GU: Labels = Labels {
    calculator: "કેલ્ક્યુલેટર",
    converter: "કન્વર્ટર",
    clear: "સાફ",
    length: "લંબાઈ",
    weight: "વજન",
    temperature: "તાપમાન",
    data: "ડેટા",
    error: "ભૂલ",
    scientific: "વૈજ્ઞાનિક",
    history: "ઇતિહાસ",
};

const TE: Labels = Labels {
    calculator: "కాలిక్యులేటర్",
    converter: "కన్వర్టర్",
    clear: "క్లియర్",
    length: "పొడవు",
    weight: "బరువు",
    temperature: "ఉష్ణోగ్రత",
    data: "డేటా",
    error: "లోపం",
    scientific: "శాస్త్రీయ",
    history: "చరిత్ర",
};

const TA: Labels = Labels {
    calculator: "கால்குலேட்டர்",
    converter: "மாற்றி",
    clear: "அழி",
    length: "நீளம்",
    weight: "எடை",
    temperature: "வெப்பம்",
    data: "தரவு",
    error: "பிழை",
    scientific: "அறிவியல்",
    history: "வரலாறு",
};

const KN: Labels = Labels {
    calculator: "ಕ್ಯಾಲ್ಕುಲೇಟರ್",
    converter: "ಪರಿವರ್ತಕ",
    clear: "ಅಳಿಸು",
    length: "ಉದ್ದ",
    weight: "ತೂಕ",
    temperature: "ತಾಪಮಾನ",
    data: "ಡೇಟಾ",
    error: "ದೋಷ",
    scientific: "ವೈಜ್ಞಾನಿಕ",
    history: "ಇತಿಹಾಸ",
};

const ML: Labels = Labels {
    calculator: "കാൽക്കുലേറ്റർ",
    converter: "കൺവെർട്ടർ",
    clear: "മായ്‌ക്കുക",
    length: "നീളം",
    weight: "ഭാരം",
    temperature: "താപനില",
    data: "ഡാറ്റ",
    error: "പിശക്",
    scientific: "ശാസ്ത്രീയ",
    history: "ചരിത്രം",
};

const PA: Labels = Labels {
    calculator: "ਕੈਲਕੁਲੇਟਰ",
    converter: "ਕਨਵਰਟਰ",
    clear: "ਸਾਫ",
    length: "ਲੰਬਾਈ",
    weight: "ਭਾਰ",
    temperature: "ਤਾਪਮਾਨ",
    data: "ਡਾਟਾ",
    error: "ਗਲਤੀ",
    scientific: "ਵਿਗਿਆਨਕ",
    history: "ਇਤਿਹਾਸ",
};

impl Language {
    pub const ALL: [Language; 11] = [
        Language::En,
        Language::Od,
        Language::Hi,
        Language::Bn,
        Language::Mr,
        Language::Gu,
        Language::Te,
        Language::Ta,
        Language::Kn,
        Language::Ml,
        Language::Pa,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Od => "od",
            Self::Hi => "hi",
            Self::Bn => "bn",
            Self::Mr => "mr",
            Self::Gu => "gu",
            Self::Te => "te",
            Self::Ta => "ta",
            Self::Kn => "kn",
            Self::Ml => "ml",
            Self::Pa => "pa",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Od => "Odia",
            Self::Hi => "Hindi",
            Self::Bn => "Bengali",
            Self::Mr => "Marathi",
            Self::Gu => "Gujarati",
            Self::Te => "Telugu",
            Self::Ta => "Tamil",
            Self::Kn => "Kannada",
            Self::Ml => "Malayalam",
            Self::Pa => "Punjabi",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Od => "ଓଡ଼ିଆ",
            Self::Hi => "हिन्दी",
            Self::Bn => "বাংলা",
            Self::Mr => "मराठी",
            Self::Gu => "ગુજરાતી",
            Self::Te => "తెలుగు",
            Self::Ta => "தமிழ்",
            Self::Kn => "ಕನ್ನಡ",
            Self::Ml => "മലയാളം",
            Self::Pa => "ਪੰਜਾਬੀ",
        }
    }

    /// Glyph for digit zero; the script's other digits follow it contiguously
    fn zero(self) -> char {
        match self {
            Self::En => '0',
            Self::Od => '୦',
            Self::Hi | Self::Mr => '०',
            Self::Bn => '০',
            Self::Gu => '૦',
            Self::Te => '౦',
            Self::Ta => '௦',
            Self::Kn => '೦',
            Self::Ml => '൦',
            Self::Pa => '੦',
        }
    }

    /// Native glyph for an ASCII digit value `0..=9`
    pub fn digit(self, value: u32) -> Option<char> {
        if value > 9 {
            return None;
        }
        char::from_u32(self.zero() as u32 + value)
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Self::En => &EN,
            Self::Od => &OD,
            Self::Hi => &HI,
            Self::Bn => &BN,
            Self::Mr => &MR,
            Self::Gu => &GU,
            Self::Te => &TE,
            Self::Ta => &TA,
            Self::Kn => &KN,
            Self::Ml => &ML,
            Self::Pa => &PA,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| SessionError::UnknownLanguage(s.to_string()))
    }
}

/// Replace ASCII digits with the language's glyphs; everything else is kept
pub fn localize(text: &str, lang: Language) -> String {
    text.chars()
        .map(|c| c.to_digit(10).and_then(|d| lang.digit(d)).unwrap_or(c))
        .collect()
}

/// Map a glyph digit from any supported script to its value
fn native_digit_value(c: char) -> Option<u32> {
    Language::ALL.iter().find_map(|lang| {
        let offset = (c as u32).checked_sub(lang.zero() as u32)?;
        (offset <= 9).then_some(offset)
    })
}

/// Replace digit glyphs of every supported script with ASCII digits
pub fn delocalize(text: &str) -> String {
    text.chars()
        .map(|c| {
            native_digit_value(c)
                .and_then(|d| char::from_digit(d, 10))
                .unwrap_or(c)
        })
        .collect()
}
