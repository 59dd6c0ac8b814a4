use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommitType {
    Build,
    Ci,
    Docs,
    Feat,
    Fix,
    Perf,
    Refactor,
    Style,
    Test,
}

impl CommitType {
    pub const ALL: [CommitType; 9] = [
        CommitType::Build,
        CommitType::Ci,
        CommitType::Docs,
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Perf,
        CommitType::Refactor,
        CommitType::Style,
        CommitType::Test,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Docs => "docs",
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Perf => "perf",
            CommitType::Refactor => "refactor",
            CommitType::Style => "style",
            CommitType::Test => "test",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CommitType::Build => {
                "Changes that affect the build system or external dependencies (example scopes: gulp, broccoli, npm)"
            }
            CommitType::Ci => {
                "Changes to our CI configuration files and scripts (example scopes: Travis, Circle, BrowserStack, SauceLabs)"
            }
            CommitType::Docs => "Documentation only changes",
            CommitType::Feat => "A new feature",
            CommitType::Fix => "A bug fix",
            CommitType::Perf => "A code change that improves performance",
            CommitType::Refactor => "A code change that neither fixes a bug nor adds a feature",
            CommitType::Style => {
                "Changes that do not affect the meaning of the code (white-space, formatting, missing semi-colons, etc)"
            }
            CommitType::Test => "Adding missing tests or correcting existing tests",
        }
    }

    /// Exact match on the type name. Case matters: `Fix` is not a valid type.
    pub fn from_str(value: &str) -> Option<Self> {
        CommitType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
    }

    /// Resolves interactive input, which may be a type name or its
    /// 1-based position in [`CommitType::ALL`].
    pub fn from_choice(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(index) = input.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| CommitType::ALL.get(i).copied());
        }
        CommitType::from_str(&input.to_lowercase())
    }

    pub fn names() -> Vec<&'static str> {
        CommitType::ALL.iter().map(CommitType::as_str).collect()
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
