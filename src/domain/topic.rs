/// News categories, in the order they are queried and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Strategy,
    Finance,
    Earnings,
    Investment,
    Fundraising,
    NewProductRelease,
    MajorEvents,
}

impl Topic {
    pub const ALL: [Topic; 7] = [
        Topic::Strategy,
        Topic::Finance,
        Topic::Earnings,
        Topic::Investment,
        Topic::Fundraising,
        Topic::NewProductRelease,
        Topic::MajorEvents,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Strategy => "Strategy",
            Topic::Finance => "Finance",
            Topic::Earnings => "Earnings",
            Topic::Investment => "Investment",
            Topic::Fundraising => "Fundraising",
            Topic::NewProductRelease => "New Product Release",
            Topic::MajorEvents => "Major Events",
        }
    }

    /// Search keywords combined with sector terms or company names.
    ///
    /// "invesmtnet" and "porduct" are intentional: search results differ
    /// with the misspellings, so they stay as configured.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Topic::Strategy => &["strategy", "expansion", "roadmap", "partnership"],
            Topic::Finance => &["finance", "revenue", "profit", "guidance"],
            Topic::Earnings => &["earnings", "quarterly results", "EPS", "outlook"],
            Topic::Investment => &["investment", "investments", "invesmtnet"],
            Topic::Fundraising => &["fundraising", "funding round", "capital raise", "series"],
            Topic::NewProductRelease => &["new product", "launch", "release", "porduct"],
            Topic::MajorEvents => &[
                "major event",
                "acquisition",
                "merger",
                "regulation",
                "sanctions",
            ],
        }
    }

    /// Earnings queries are issued per company instead of per sector term.
    pub fn is_company_topic(&self) -> bool {
        matches!(self, Topic::Earnings)
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
