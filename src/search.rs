//! Search box.
//!
//! Searches a small fixed list of sample entries. The entries are
//! placeholders and are not derived from the project catalog.

/// Minimum query length before results are shown.
pub const MIN_QUERY_LEN: usize = 2;

/// Kind of a search entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Project,
    Skill,
    Blog,
}

impl ResultKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ResultKind::Project => "project",
            ResultKind::Skill => "skill",
            ResultKind::Blog => "blog",
        }
    }
}

/// A searchable entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchItem {
    pub kind: ResultKind,
    pub title: &'static str,
    pub link: &'static str,
    pub category: &'static str,
}

/// The sample entries.
pub const SAMPLE_ITEMS: [SearchItem; 4] = [
    SearchItem {
        kind: ResultKind::Project,
        title: "Neural Dashboard",
        link: "#",
        category: "Featured",
    },
    SearchItem {
        kind: ResultKind::Skill,
        title: "JavaScript",
        link: "#skills",
        category: "Skills",
    },
    SearchItem {
        kind: ResultKind::Project,
        title: "Automation OS",
        link: "#",
        category: "Featured",
    },
    SearchItem {
        kind: ResultKind::Blog,
        title: "Building with React",
        link: "#",
        category: "Blog",
    },
];

/// What the results dropdown shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Results {
    /// Query too short; dropdown empty
    Empty,
    Matches(Vec<SearchItem>),
    NoResults,
}

/// Search box state.
#[derive(Debug, Clone)]
pub struct SearchBox {
    input: String,
    results: Results,
    /// Results are visible (hidden when focus leaves the box).
    open: bool,
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            results: Results::Empty,
            open: false,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn results(&self) -> &Results {
        &self.results
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn input_char(&mut self, c: char) {
        self.input.push(c);
        self.refresh();
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
        self.refresh();
    }

    /// Hides the dropdown; the query and results are kept.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// First match, if any.
    pub fn first_match(&self) -> Option<&SearchItem> {
        match &self.results {
            Results::Matches(items) => items.first(),
            _ => None,
        }
    }

    fn refresh(&mut self) {
        self.open = true;
        self.results = search(&self.input);
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `query` against the sample entries.
pub fn search(query: &str) -> Results {
    let query = query.trim().to_lowercase();
    if query.chars().count() < MIN_QUERY_LEN {
        return Results::Empty;
    }

    let matches: Vec<SearchItem> = SAMPLE_ITEMS
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&query)
                || item.category.to_lowercase().contains(&query)
        })
        .copied()
        .collect();

    if matches.is_empty() {
        Results::NoResults
    } else {
        Results::Matches(matches)
    }
}
