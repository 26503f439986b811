use serde::{Deserialize, Serialize};
use std::fmt;

/// Visitor categories reported by http:BL.
///
/// The wire encoding is a bitmask in the fourth response octet; the bit
/// position of each category is fixed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Category {
    /// Suspicious behavior observed but not yet classified further.
    Suspicious = 0,
    /// Email address harvester.
    Harvester = 1,
    /// Comment spammer.
    CommentSpammer = 2,
}

impl Category {
    /// All categories, in wire bit order.
    pub const ALL: [Self; 3] = [Self::Suspicious, Self::Harvester, Self::CommentSpammer];

    /// The bitmask bit for this category.
    #[must_use]
    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Human-readable label for this category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Suspicious => "suspicious",
            Self::Harvester => "harvester",
            Self::CommentSpammer => "comment-spammer",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Search engines identified by http:BL.
///
/// The service documents a serial-number table for search engines; only
/// the entries it has actually assigned are represented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchEngine {
    /// Google crawler.
    Google,
}

impl SearchEngine {
    /// Look up a search engine by its wire serial number.
    ///
    /// Returns `None` for serials the table does not cover; an unknown
    /// serial is still a valid search-engine response.
    #[must_use]
    pub const fn from_serial(serial: u8) -> Option<Self> {
        match serial {
            0 => Some(Self::Google),
            _ => None,
        }
    }

    /// Human-readable label for this engine.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Google => "google",
        }
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A decoded http:BL threat assessment.
///
/// Built from the three payload octets of a `127.x.y.z` response address.
/// The fourth octet carries either a category bitmask or, when zero, marks
/// the visitor as a search engine whose serial sits in the third octet;
/// the two interpretations are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    age: u8,
    threat_score: u8,
    flags: u8,
}

impl Response {
    /// Assemble a response from its payload octets.
    #[must_use]
    pub const fn new(age: u8, threat_score: u8, flags: u8) -> Self {
        Self {
            age,
            threat_score,
            flags,
        }
    }

    /// Days since the IP was last seen exhibiting the reported behavior.
    #[must_use]
    pub const fn age(&self) -> u8 {
        self.age
    }

    /// Threat score in `0..=100`, higher is more malicious.
    ///
    /// For search-engine responses this octet is the engine serial, not a
    /// threat score; see [`Response::search_engine`].
    #[must_use]
    pub const fn threat_score(&self) -> u8 {
        self.threat_score
    }

    /// Raw category bitmask.
    #[must_use]
    pub const fn flags(&self) -> u8 {
        self.flags
    }

    /// Returns true if the given category applies to this visitor.
    #[must_use]
    pub const fn has_category(&self, category: Category) -> bool {
        self.flags & category.bit() != 0
    }

    /// Iterate over the categories set in the bitmask, in wire bit order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(move |c| self.has_category(*c))
    }

    /// Returns true if this response identifies a search engine.
    #[must_use]
    pub const fn is_search_engine(&self) -> bool {
        self.flags == 0
    }

    /// The identified search engine, if this is a search-engine response
    /// and its serial is in the known table.
    #[must_use]
    pub const fn search_engine(&self) -> Option<SearchEngine> {
        if self.is_search_engine() {
            SearchEngine::from_serial(self.threat_score)
        } else {
            None
        }
    }
}
