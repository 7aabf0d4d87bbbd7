use figment::Jail;
use tess_config::TesseraConfig;

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("TESSERA_GRID__DEFAULT_COLUMN_WIDTH", "180");
        jail.set_env("TESSERA_CACHE__DISPLAY_CAPACITY", "32");

        let config = TesseraConfig::load().expect("config loads");
        assert_eq!(config.grid.default_column_width, 180);
        assert_eq!(config.cache.display_capacity, 32);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".tessera")?;
        jail.create_file(
            ".tessera/config.toml",
            "[grid]\nuntitled_label = \"From file\"\n",
        )?;
        jail.set_env("TESSERA_GRID__UNTITLED_LABEL", "From env");

        let config = TesseraConfig::load().expect("config loads");
        assert_eq!(config.grid.untitled_label, "From env");
        Ok(())
    });
}
