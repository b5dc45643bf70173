use nsjoin_namespace::{JoinConfig, ProcNamespaceOpener, ShellRunner};

#[test]
fn test_constructor_ran_before_tests() {
    assert!(nsjoin_hook::has_run());
}

#[test]
fn test_run_from_env_without_config() {
    // SAFETY: no other test in this binary touches these variables
    unsafe {
        std::env::remove_var("ddocker_pid");
        std::env::remove_var("ddocker_cmd");
    }

    assert_eq!(nsjoin_hook::run_from_env(), None);
}

#[test]
fn test_run_nonexistent_target() {
    let config = JoinConfig::new(999_999, "true");

    let code = nsjoin_hook::run(&config, &mut ProcNamespaceOpener::new(), &mut ShellRunner::new());

    assert_eq!(code, 0);
}

#[test]
fn test_run_failing_command() {
    let config = JoinConfig::new(999_999, "exit 42");

    let code = nsjoin_hook::run(&config, &mut ProcNamespaceOpener::new(), &mut ShellRunner::new());

    assert_eq!(code, 0);
}

#[test]
fn test_run_strict() {
    let config = JoinConfig::new(999_999, "true").with_strict(true);

    let code = nsjoin_hook::run(&config, &mut ProcNamespaceOpener::new(), &mut ShellRunner::new());

    assert_eq!(code, 1);
}
