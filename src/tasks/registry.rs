//! The task table: names, summaries, and the work bound to each name
//!
//! The registry is built once at startup and never mutated. Insertion
//! order is the order tasks appear in the help listing.

use std::fmt;

/// One external tool invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Program to spawn
    pub program: &'static str,
    /// Arguments passed to the program
    pub args: &'static [&'static str],
}

impl Step {
    /// Create a new step
    #[must_use]
    pub const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// What a task does when dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Run a fixed sequence of external invocations, stopping at the
    /// first non-zero exit
    Steps(&'static [Step]),
    /// Built-in artifact cleanup routine
    Clean,
    /// Print the task listing
    Help,
}

/// A named task with a one-line summary
#[derive(Debug, Clone, Copy)]
pub struct TaskSpec {
    /// Unique task name as typed on the command line
    pub name: &'static str,
    /// One-line description shown in the help listing
    pub summary: &'static str,
    /// The work bound to this name
    pub action: Action,
}

const INSTALL: &[Step] = &[Step::new("pip-sync", &["requirements.txt"])];
const DEV: &[Step] = &[Step::new("pip", &["install", "-e", "."])];
const COMPILE: &[Step] = &[Step::new("pip-compile", &["requirements.in"])];
const UPGRADE: &[Step] = &[
    Step::new("pip-compile", &["--upgrade", "requirements.in"]),
    Step::new("pip-sync", &["requirements.txt"]),
];
const FORMAT: &[Step] = &[Step::new("black", &["."]), Step::new("isort", &["."])];
const FORMAT_CHECK: &[Step] = &[
    Step::new("black", &["--check", "."]),
    Step::new("ruff", &["format", "--check", "."]),
];
const LINT: &[Step] = &[Step::new("ruff", &["check", "."])];
const TEST: &[Step] = &[Step::new("pytest", &[])];
const TYPE_CHECK: &[Step] = &[Step::new("mypy", &["."])];
const PRE_COMMIT: &[Step] = &[Step::new("pre-commit", &["install"])];

/// Insertion-ordered, immutable collection of all known tasks
#[derive(Debug)]
pub struct TaskRegistry {
    tasks: Vec<TaskSpec>,
}

impl TaskRegistry {
    /// Build the standard task table
    #[must_use]
    pub fn standard() -> Self {
        let tasks = vec![
            TaskSpec {
                name: "help",
                summary: "Show available tasks",
                action: Action::Help,
            },
            TaskSpec {
                name: "install",
                summary: "Install production dependencies (from requirements.txt)",
                action: Action::Steps(INSTALL),
            },
            TaskSpec {
                name: "dev",
                summary: "Install project in editable mode",
                action: Action::Steps(DEV),
            },
            TaskSpec {
                name: "sync",
                summary: "Sync virtual environment with requirements.txt (pip-sync)",
                action: Action::Steps(INSTALL),
            },
            TaskSpec {
                name: "compile",
                summary: "Compile requirements.txt from requirements.in (pip-compile)",
                action: Action::Steps(COMPILE),
            },
            TaskSpec {
                name: "upgrade",
                summary: "Upgrade all dependencies (pip-compile --upgrade + pip-sync)",
                action: Action::Steps(UPGRADE),
            },
            TaskSpec {
                name: "format",
                summary: "Format code with black and isort",
                action: Action::Steps(FORMAT),
            },
            TaskSpec {
                name: "format-check",
                summary: "Check formatting with black --check and ruff format --check",
                action: Action::Steps(FORMAT_CHECK),
            },
            TaskSpec {
                name: "lint",
                summary: "Lint with ruff",
                action: Action::Steps(LINT),
            },
            TaskSpec {
                name: "test",
                summary: "Run pytest",
                action: Action::Steps(TEST),
            },
            TaskSpec {
                name: "type-check",
                summary: "Run mypy",
                action: Action::Steps(TYPE_CHECK),
            },
            TaskSpec {
                name: "clean",
                summary: "Remove build artifacts, caches, etc.",
                action: Action::Clean,
            },
            TaskSpec {
                name: "pre-commit",
                summary: "Install pre-commit git hooks",
                action: Action::Steps(PRE_COMMIT),
            },
        ];

        Self { tasks }
    }

    /// Look up a task by its exact name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&TaskSpec> {
        self.tasks.iter().find(|task| task.name == name)
    }

    /// Iterate over all tasks in help-listing order
    pub fn iter(&self) -> impl Iterator<Item = &TaskSpec> {
        self.tasks.iter()
    }

    /// Number of registered tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_NAMES: &[&str] = &[
        "help",
        "install",
        "dev",
        "sync",
        "compile",
        "upgrade",
        "format",
        "format-check",
        "lint",
        "test",
        "type-check",
        "clean",
        "pre-commit",
    ];

    #[test]
    fn test_every_known_name_resolves() {
        let registry = TaskRegistry::standard();
        for name in ALL_NAMES {
            let spec = registry.find(name).unwrap();
            assert_eq!(spec.name, *name);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let registry = TaskRegistry::standard();
        for name in ALL_NAMES {
            let count = registry.iter().filter(|task| task.name == *name).count();
            assert_eq!(count, 1, "task {name} registered more than once");
        }
        assert_eq!(registry.len(), ALL_NAMES.len());
    }

    #[test]
    fn test_listing_order_is_insertion_order() {
        let registry = TaskRegistry::standard();
        let names: Vec<&str> = registry.iter().map(|task| task.name).collect();
        assert_eq!(names, ALL_NAMES);
    }

    #[test]
    fn test_unknown_name_not_found() {
        let registry = TaskRegistry::standard();
        assert!(registry.find("deploy").is_none());
        assert!(registry.find("").is_none());
        // Lookup is exact, not prefix or case-insensitive
        assert!(registry.find("Lint").is_none());
        assert!(registry.find("lin").is_none());
    }

    #[test]
    fn test_multi_step_tasks_keep_order() {
        let registry = TaskRegistry::standard();

        let Action::Steps(steps) = registry.find("upgrade").unwrap().action else {
            panic!("upgrade should be a step sequence");
        };
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].program, "pip-compile");
        assert_eq!(steps[1].program, "pip-sync");

        let Action::Steps(steps) = registry.find("format").unwrap().action else {
            panic!("format should be a step sequence");
        };
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].program, "black");
        assert_eq!(steps[1].program, "isort");
    }

    #[test]
    fn test_step_display() {
        let step = Step::new("ruff", &["format", "--check", "."]);
        assert_eq!(step.to_string(), "ruff format --check .");

        let bare = Step::new("pytest", &[]);
        assert_eq!(bare.to_string(), "pytest");
    }

    #[test]
    fn test_builtin_actions() {
        let registry = TaskRegistry::standard();
        assert_eq!(registry.find("help").unwrap().action, Action::Help);
        assert_eq!(registry.find("clean").unwrap().action, Action::Clean);
    }
}
