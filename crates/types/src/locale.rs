//! The language/script selection for a report, together with the
//! localized fixed strings the engine emits (report header, labels and
//! the default disclaimer appended when the model omitted one).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Hindi,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Hindi];

    /// Whether this locale renders in a non-Latin script and therefore
    /// needs a dedicated font family with all three weights registered.
    pub fn needs_script_font(&self) -> bool {
        matches!(self, Locale::Hindi)
    }

    pub fn report_title(&self) -> &'static str {
        match self {
            Locale::English => "Professional Land Use Report",
            Locale::Hindi => "पेशेवर भूमि उपयोग रिपोर्ट",
        }
    }

    pub fn prepared_for_label(&self) -> &'static str {
        match self {
            Locale::English => "Prepared for",
            Locale::Hindi => "तैयार की गई",
        }
    }

    pub fn location_label(&self) -> &'static str {
        match self {
            Locale::English => "Location",
            Locale::Hindi => "स्थान",
        }
    }

    /// The line prefix that marks a disclaimer paragraph. Every marker is
    /// recognized in every locale; the model occasionally answers in the
    /// other language.
    pub const DISCLAIMER_MARKERS: [&'static str; 2] = ["Disclaimer:", "अस्वीकरण:"];

    pub fn default_disclaimer(&self) -> &'static str {
        match self {
            Locale::English => {
                "Disclaimer: This report is for informational purposes only. \
                 Please consult with local zoning authorities, financial advisors, \
                 and legal professionals before making any investment decisions."
            }
            Locale::Hindi => {
                "अस्वीकरण: यह रिपोर्ट केवल सूचनात्मक उद्देश्यों के लिए है। किसी भी निवेश निर्णय लेने से पहले \
                 कृपया स्थानीय जोनिंग अधिकारियों, वित्तीय सलाहकारों और कानूनी पेशेवरों से परामर्श करें।"
            }
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::English => write!(f, "english"),
            Locale::Hindi => write!(f, "hindi"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_is_english() {
        assert_eq!(Locale::default(), Locale::English);
    }

    #[test]
    fn default_disclaimers_carry_their_marker() {
        for locale in Locale::ALL {
            let text = locale.default_disclaimer();
            assert!(
                Locale::DISCLAIMER_MARKERS.iter().any(|m| text.starts_with(m)),
                "disclaimer for {locale} does not start with a marker"
            );
        }
    }
}
