//! Chess title codes and the free-text synonyms that map onto them.

use std::fmt;

/// A title tier as chess.com names it in `titled/{code}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Title {
    Grandmaster,
    WomanGrandmaster,
    InternationalMaster,
    WomanInternationalMaster,
    FideMaster,
    WomanFideMaster,
    NationalMaster,
    WomanNationalMaster,
    CandidateMaster,
    WomanCandidateMaster,
}

impl Title {
    pub const ALL: [Title; 10] = [
        Title::Grandmaster,
        Title::WomanGrandmaster,
        Title::InternationalMaster,
        Title::WomanInternationalMaster,
        Title::FideMaster,
        Title::WomanFideMaster,
        Title::NationalMaster,
        Title::WomanNationalMaster,
        Title::CandidateMaster,
        Title::WomanCandidateMaster,
    ];

    /// The API code, e.g. `"WGM"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Title::Grandmaster => "GM",
            Title::WomanGrandmaster => "WGM",
            Title::InternationalMaster => "IM",
            Title::WomanInternationalMaster => "WIM",
            Title::FideMaster => "FM",
            Title::WomanFideMaster => "WFM",
            Title::NationalMaster => "NM",
            Title::WomanNationalMaster => "WNM",
            Title::CandidateMaster => "CM",
            Title::WomanCandidateMaster => "WCM",
        }
    }

    /// Lower-case phrases accepted for this title.
    fn synonyms(self) -> &'static [&'static str] {
        match self {
            Title::Grandmaster => &[
                "grandmaster",
                "gms",
                "grand master",
                "grand masters",
                "grandmasters",
            ],
            Title::InternationalMaster => {
                &["international master", "ims", "international masters"]
            }
            Title::FideMaster => &["fide master", "fms", "fide masters"],
            Title::CandidateMaster => &["candidate master", "cms", "candidate masters"],
            Title::NationalMaster => &["national master", "nms", "national masters"],
            Title::WomanGrandmaster => &["wgm", "w grandmaster", "w grand masters"],
            Title::WomanInternationalMaster => {
                &["wim", "w international master", "w international masters"]
            }
            Title::WomanFideMaster => &["wfm", "w fide master", "w fide masters"],
            Title::WomanCandidateMaster => {
                &["wcm", "w candidate master", "w candidate masters"]
            }
            Title::WomanNationalMaster => &["wnm", "w national master", "w national masters"],
        }
    }

    /// Exact, case-sensitive match against the API codes.
    pub fn from_code(code: &str) -> Option<Title> {
        Title::ALL.into_iter().find(|t| t.as_str() == code)
    }

    /// Match a lower-cased synonym phrase. Codes are not accepted here
    /// unless they appear in the synonym table (`wgm`, `wim`, ...).
    pub fn from_text(text: &str) -> Option<Title> {
        let text = text.to_lowercase();
        Title::ALL
            .into_iter()
            .find(|t| t.synonyms().contains(&text.as_str()))
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map free text to an API title code, or `""` if nothing matches.
///
/// Canonical codes pass through untouched.
pub fn normalize_title(text: &str) -> &'static str {
    Title::from_code(text)
        .or_else(|| Title::from_text(text))
        .map(Title::as_str)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_pass_through() {
        for title in Title::ALL {
            assert_eq!(normalize_title(title.as_str()), title.as_str());
        }
    }

    #[test]
    fn test_synonyms() {
        assert_eq!(normalize_title("Grandmaster"), "GM");
        assert_eq!(normalize_title("GRAND MASTERS"), "GM");
        assert_eq!(normalize_title("gms"), "GM");
        assert_eq!(normalize_title("w international masters"), "WIM");
        assert_eq!(normalize_title("International Master"), "IM");
        assert_eq!(normalize_title("fms"), "FM");
        assert_eq!(normalize_title("candidate masters"), "CM");
        assert_eq!(normalize_title("national master"), "NM");
        assert_eq!(normalize_title("W Grandmaster"), "WGM");
        assert_eq!(normalize_title("w fide masters"), "WFM");
        assert_eq!(normalize_title("w candidate master"), "WCM");
        assert_eq!(normalize_title("w national masters"), "WNM");
    }

    #[test]
    fn test_lowercase_codes() {
        // Women's codes appear in the synonym table, the open ones do not.
        assert_eq!(normalize_title("wgm"), "WGM");
        assert_eq!(normalize_title("wnm"), "WNM");
        assert_eq!(normalize_title("gm"), "");
        assert_eq!(normalize_title("im"), "");
    }

    #[test]
    fn test_unknown_is_empty() {
        assert_eq!(normalize_title("bogus"), "");
        assert_eq!(normalize_title(""), "");
        assert_eq!(normalize_title("grand  master"), "");
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert_eq!(Title::from_code("GM"), Some(Title::Grandmaster));
        assert_eq!(Title::from_code("Gm"), None);
        assert_eq!(Title::WomanFideMaster.to_string(), "WFM");
    }
}
