use std::path::Path;

use proptest::prelude::*;
use railmux_core::{LaunchEnv, LaunchPlan, MapEnv, StaticLocator, WINDOW_LABELS, resolve};

const TOOL_WINDOWS: [&str; 4] = ["runners", "consoles", "databases", "servers"];

fn plan(
    session: Option<&str>,
    cwd: &str,
    vars: &[(&str, &str)],
    locator: &StaticLocator,
) -> LaunchPlan {
    let env: MapEnv = vars.iter().copied().collect();
    resolve(session, Path::new(cwd), &LaunchEnv::from_lookup(&env), locator)
        .expect("plan should resolve")
}

fn command<'a>(plan: &'a LaunchPlan, label: &str) -> &'a str {
    plan.window(label)
        .map(|w| w.command.as_str())
        .unwrap_or_else(|| panic!("missing window {label}"))
}

fn assert_rails_windows(plan: &LaunchPlan, rails: &str) {
    for (label, sub) in TOOL_WINDOWS.iter().zip(["test", "console", "db", "server"]) {
        assert_eq!(command(plan, label), format!("{rails} {sub}"), "window {label}");
    }
}

#[test]
fn explicit_session_ignores_cwd() {
    let p = plan(Some("myapp"), "/home/x/blog", &[], &StaticLocator::new());
    assert_eq!(p.session, "myapp");
}

#[test]
fn session_defaults_to_cwd_basename() {
    let p = plan(None, "/home/x/blog", &[], &StaticLocator::new());
    assert_eq!(p.session, "blog");
}

#[test]
fn logger_defaults_to_development() {
    let p = plan(None, "/w/blog", &[], &StaticLocator::new());
    assert_eq!(p.commands.rails_env, "development");
    assert_eq!(command(&p, "loggers"), "tail -f log/development.log");
}

#[test]
fn logger_follows_rails_env() {
    let p = plan(None, "/w/blog", &[("RAILS_ENV", "production")], &StaticLocator::new());
    assert_eq!(command(&p, "loggers"), "tail -f log/production.log");
}

#[test]
fn binstub_used_even_with_bundle_exec_set() {
    let loc = StaticLocator::new()
        .with_path("bin/rails")
        .with_command("bundle");
    let p = plan(None, "/w/blog", &[("BUNDLE_EXEC", "bundle exec")], &loc);
    assert_rails_windows(&p, "bin/rails");
}

#[test]
fn bundler_prefix_when_no_binstub() {
    let loc = StaticLocator::new().with_command("bundle");
    let p = plan(None, "/w/blog", &[], &loc);
    assert_rails_windows(&p, "bundle exec rails");
}

#[test]
fn bare_tool_without_bundler() {
    let p = plan(None, "/w/blog", &[], &StaticLocator::new());
    assert_rails_windows(&p, "rails");
}

#[test]
fn rails_override_bypasses_probes() {
    let loc = StaticLocator::new()
        .with_path("bin/rails")
        .with_command("bundle");
    let p = plan(None, "/w/blog", &[("RAILS", "custom-rails")], &loc);
    assert_rails_windows(&p, "custom-rails");
}

#[test]
fn window_order_is_fixed() {
    let p = plan(None, "/w/blog", &[("EDITOR", "emacs")], &StaticLocator::new());
    let labels: Vec<&str> = p.windows.iter().map(|w| w.label.as_str()).collect();
    assert_eq!(labels, WINDOW_LABELS);
}

#[test]
fn end_to_end_argument_list() {
    let loc = StaticLocator::new().with_command("bundle");
    let p = plan(None, "/home/me/demo", &[], &loc);
    let expected = [
        "demo",
        "quickies",
        ":",
        "watchers",
        ":",
        "editors",
        "",
        "runners",
        "bundle exec rails test",
        "consoles",
        "bundle exec rails console",
        "databases",
        "bundle exec rails db",
        "servers",
        "bundle exec rails server",
        "loggers",
        "tail -f log/development.log",
        "options",
        ":",
    ];
    assert_eq!(p.to_args(), expected);
}

proptest! {
    #[test]
    fn always_nine_windows(
        editor in proptest::option::of(".*"),
        bundle in proptest::option::of(".*"),
        rails in proptest::option::of(".*"),
        rails_env in proptest::option::of("[a-z]{0,12}"),
        has_binstub in any::<bool>(),
        has_bundler in any::<bool>(),
    ) {
        let mut env = MapEnv::new();
        for (key, value) in [
            ("EDITOR", editor),
            ("BUNDLE_EXEC", bundle),
            ("RAILS", rails),
            ("RAILS_ENV", rails_env),
        ] {
            if let Some(v) = value {
                env = env.with(key, v);
            }
        }
        let mut loc = StaticLocator::new();
        if has_binstub {
            loc = loc.with_path("bin/rails");
        }
        if has_bundler {
            loc = loc.with_command("bundle");
        }

        let p = resolve(None, Path::new("/w/app"), &LaunchEnv::from_lookup(&env), &loc)
            .expect("plan should resolve");
        let labels: Vec<&str> = p.windows.iter().map(|w| w.label.as_str()).collect();
        prop_assert_eq!(labels, WINDOW_LABELS.to_vec());
        prop_assert_eq!(p.to_args().len(), 19);
    }
}
