use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use mdabbr_mdast::DefinitionOutput;
pub use mdabbr_parser::Extensions;

use mdabbr_mdast::HtmlOptions;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HtmlConfig {
    /// What to do with `*[label]: title` lines in HTML output
    pub definitions: DefinitionOutput,
}

impl HtmlConfig {
    pub fn options(&self) -> HtmlOptions {
        HtmlOptions {
            definitions: self.definitions,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LineEnding {
    /// Keep whatever the first line of the input uses
    Auto,
    Lf,
    Crlf,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub extensions: Extensions,
    pub html: HtmlConfig,
    pub line_ending: Option<LineEnding>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: Extensions::default(),
            html: HtmlConfig::default(),
            line_ending: Some(LineEnding::Auto),
        }
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn abbreviations(mut self, enabled: bool) -> Self {
        self.config.extensions.abbreviations = enabled;
        self
    }

    pub fn extensions(mut self, extensions: Extensions) -> Self {
        self.config.extensions = extensions;
        self
    }

    pub fn html_definitions(mut self, output: DefinitionOutput) -> Self {
        self.config.html.definitions = output;
        self
    }

    pub fn line_ending(mut self, ending: LineEnding) -> Self {
        self.config.line_ending = Some(ending);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

const CANDIDATE_NAMES: &[&str] = &[".mdabbr.toml", "mdabbr.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn user_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("mdabbr").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    dirs::config_dir()
        .map(|dir| dir.join("mdabbr").join("config.toml"))
        .filter(|p| p.is_file())
}

/// Load configuration with precedence:
/// 1) explicit path
/// 2) walk up from start_dir: .mdabbr.toml, mdabbr.toml
/// 3) $XDG_CONFIG_HOME/mdabbr/config.toml, then the platform config dir
/// 4) default config
///
/// A config file that exists but does not parse is an error at every level.
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir) {
        let cfg = read_config(&p)?;
        return Ok((cfg, Some(p)));
    }

    if let Some(p) = user_config_path() {
        let cfg = read_config(&p)?;
        return Ok((cfg, Some(p)));
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
