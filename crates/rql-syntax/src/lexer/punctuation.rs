/// The set of punctuation markers a clause is split on.
///
/// Markers are listed longest first so that `>=` wins over `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Punctuation {
    markers: &'static [&'static str],
}

impl Punctuation {
    /// `from` clause: entity lists and `on` conditions.
    pub const TABLE: Punctuation = Punctuation {
        markers: &[",", "="],
    };

    /// `where` clause.
    pub const WHERE: Punctuation = Punctuation {
        markers: &[
            ">=", "<=", "<>", "!=", ",", "=", ">", "<", "+", "-", "*", "/", "(", ")",
        ],
    };

    /// `order by` clause.
    pub const ORDER_BY: Punctuation = Punctuation {
        markers: &["(", ")", ","],
    };

    /// Returns the marker `rest` starts with, if any.
    pub fn match_at(&self, rest: &str) -> Option<&'static str> {
        self.markers.iter().copied().find(|m| rest.starts_with(m))
    }
}
