use std::path::Path;

use figment::Jail;
use verdict_config::GovernanceConfig;

#[test]
fn env_overrides_scalar_values() {
    Jail::expect_with(|jail| {
        jail.set_env("VERDICT_RECORDS_DIR", "decisions");
        jail.set_env("VERDICT_PROMOTION_GATE__MIN_ALTERNATIVES", "3");

        let config = GovernanceConfig::load(Path::new("."), None).expect("config loads");
        assert_eq!(config.records_dir, "decisions");
        assert_eq!(config.promotion_gate.min_alternatives, 3);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".verdict")?;
        jail.create_file(".verdict/config.toml", "index_file = \"from-file.md\"\n")?;
        jail.set_env("VERDICT_INDEX_FILE", "from-env.md");

        let config = GovernanceConfig::load(Path::new("."), None).expect("config loads");
        assert_eq!(config.index_file, "from-env.md");
        Ok(())
    });
}

#[test]
fn env_overrides_title_policy() {
    Jail::expect_with(|jail| {
        jail.set_env("VERDICT_TITLE_POLICY__SOURCE", "heading");

        let config = GovernanceConfig::load(Path::new("."), None).expect("config loads");
        assert_eq!(
            config.title_policy.source,
            verdict_config::TitleSource::Heading
        );
        Ok(())
    });
}
