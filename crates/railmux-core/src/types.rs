use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Tools ────────────────────────────────────────────────────────

/// Framework CLI and task runner, the two commands resolved per project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Rails,
    Rake,
}

impl Tool {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rails => "rails",
            Self::Rake => "rake",
        }
    }

    /// Environment variable that overrides the resolved command verbatim.
    pub fn env_key(self) -> &'static str {
        match self {
            Self::Rails => "RAILS",
            Self::Rake => "RAKE",
        }
    }

    /// Project-local binstub, relative to the project root.
    pub fn binstub(self) -> &'static str {
        match self {
            Self::Rails => "bin/rails",
            Self::Rake => "bin/rake",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Windows ──────────────────────────────────────────────────────

/// Command placeholder meaning "open an interactive shell".
pub const INTERACTIVE_SHELL: &str = ":";

/// Window labels in launch order.
pub const WINDOW_LABELS: [&str; 9] = [
    "quickies",
    "watchers",
    "editors",
    "runners",
    "consoles",
    "databases",
    "servers",
    "loggers",
    "options",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub label: String,
    pub command: String,
}

impl WindowSpec {
    pub fn new(label: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            command: command.into(),
        }
    }

    pub fn shell(label: impl Into<String>) -> Self {
        Self::new(label, INTERACTIVE_SHELL)
    }

    /// True when the window should just hold a shell: the placeholder,
    /// an empty command, or whitespace only.
    pub fn is_interactive(&self) -> bool {
        let cmd = self.command.trim();
        cmd.is_empty() || cmd == INTERACTIVE_SHELL
    }
}

// ─── Plan ─────────────────────────────────────────────────────────

/// Every value the resolver settled on, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCommands {
    pub editor: String,
    pub bundle_exec: String,
    pub rails: String,
    pub rake: String,
    pub rails_env: String,
}

impl ResolvedCommands {
    /// The fixed nine-window layout, filled in from the resolved values.
    pub fn windows(&self) -> Vec<WindowSpec> {
        let rails = &self.rails;
        vec![
            WindowSpec::shell("quickies"),
            WindowSpec::shell("watchers"),
            WindowSpec::new("editors", self.editor.as_str()),
            WindowSpec::new("runners", format!("{rails} test")),
            WindowSpec::new("consoles", format!("{rails} console")),
            WindowSpec::new("databases", format!("{rails} db")),
            WindowSpec::new("servers", format!("{rails} server")),
            WindowSpec::new("loggers", format!("tail -f log/{}.log", self.rails_env)),
            WindowSpec::shell("options"),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchPlan {
    pub session: String,
    pub windows: Vec<WindowSpec>,
    pub commands: ResolvedCommands,
}

impl LaunchPlan {
    pub fn new(session: impl Into<String>, commands: ResolvedCommands) -> Self {
        Self {
            session: session.into(),
            windows: commands.windows(),
            commands,
        }
    }

    /// Positional argument list for a session launcher:
    /// `session, label_1, command_1, ..., label_n, command_n`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(1 + self.windows.len() * 2);
        args.push(self.session.clone());
        for w in &self.windows {
            args.push(w.label.clone());
            args.push(w.command.clone());
        }
        args
    }

    pub fn window(&self, label: &str) -> Option<&WindowSpec> {
        self.windows.iter().find(|w| w.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands() -> ResolvedCommands {
        ResolvedCommands {
            editor: "vim".to_string(),
            bundle_exec: "bundle exec".to_string(),
            rails: "bin/rails".to_string(),
            rake: "bin/rake".to_string(),
            rails_env: "test".to_string(),
        }
    }

    #[test]
    fn tool_names_and_binstubs() {
        assert_eq!(Tool::Rails.to_string(), "rails");
        assert_eq!(Tool::Rake.env_key(), "RAKE");
        assert_eq!(Tool::Rake.binstub(), "bin/rake");
    }

    #[test]
    fn windows_follow_label_order() {
        let labels: Vec<String> = commands().windows().into_iter().map(|w| w.label).collect();
        assert_eq!(labels, WINDOW_LABELS);
    }

    #[test]
    fn rails_commands_are_interpolated() {
        let plan = LaunchPlan::new("blog", commands());
        assert_eq!(plan.window("runners").map(|w| w.command.as_str()), Some("bin/rails test"));
        assert_eq!(plan.window("servers").map(|w| w.command.as_str()), Some("bin/rails server"));
        assert_eq!(
            plan.window("loggers").map(|w| w.command.as_str()),
            Some("tail -f log/test.log")
        );
        assert!(plan.window("nope").is_none());
    }

    #[test]
    fn interactive_detection() {
        assert!(WindowSpec::shell("a").is_interactive());
        assert!(WindowSpec::new("a", "").is_interactive());
        assert!(WindowSpec::new("a", "  ").is_interactive());
        assert!(!WindowSpec::new("a", "vim").is_interactive());
    }

    #[test]
    fn to_args_flattens_pairs() {
        let plan = LaunchPlan::new("blog", commands());
        let args = plan.to_args();
        assert_eq!(args.len(), 19);
        assert_eq!(args[0], "blog");
        assert_eq!(&args[1..3], ["quickies", ":"]);
        assert_eq!(&args[5..7], ["editors", "vim"]);
        assert_eq!(&args[17..19], ["options", ":"]);
    }

    #[test]
    fn plan_serializes_to_json() {
        let plan = LaunchPlan::new("blog", commands());
        let json = serde_json::to_value(&plan).expect("serialize");
        assert_eq!(json["session"], "blog");
        assert_eq!(json["windows"].as_array().map(Vec::len), Some(9));
        assert_eq!(json["commands"]["rails_env"], "test");
    }
}
