use crate::core::reconciler::{Policy, Reconciler, Schedule, Window};
use crate::core::reconciler::checkpoint::CHECKPOINT_COUNT;
use crate::errors::{AppError, AppResult};
use crate::models::marker::{ReservedLabels, default_break_labels, default_day_end_labels};
use crate::utils::path::expand_tilde;
use crate::utils::time::{parse_time_to_seconds, parse_utc_offset};
use chrono::{FixedOffset, Local};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub start: String, // HH:MM
    pub end: String,   // HH:MM
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub policy: Policy,
    /// `+HH:MM`; `None` means the host's local offset at startup.
    #[serde(default)]
    pub utc_offset: Option<String>,
    #[serde(default = "default_schedule")]
    pub schedule: Vec<WindowConfig>,
    #[serde(default = "default_checkpoints")]
    pub checkpoints: Vec<String>,
    #[serde(default = "default_break_labels")]
    pub break_labels: Vec<String>,
    #[serde(default = "default_day_end_labels")]
    pub day_end_labels: Vec<String>,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_schedule() -> Vec<WindowConfig> {
    vec![
        WindowConfig {
            start: "09:00".to_string(),
            end: "13:00".to_string(),
        },
        WindowConfig {
            start: "14:00".to_string(),
            end: "18:00".to_string(),
        },
    ]
}
fn default_checkpoints() -> Vec<String> {
    ["08:45", "13:00", "14:15", "18:00"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            bind_address: default_bind_address(),
            log_level: default_log_level(),
            policy: Policy::default(),
            utc_offset: None,
            schedule: default_schedule(),
            checkpoints: default_checkpoints(),
            break_labels: default_break_labels(),
            day_end_labels: default_day_end_labels(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("RTIMETRACK_HOME") {
            return PathBuf::from(dir);
        }
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimetrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimetrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimetrack.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimetrack.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let mut cfg: Config =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn offset(&self) -> AppResult<FixedOffset> {
        match &self.utc_offset {
            Some(s) => parse_utc_offset(s)
                .ok_or_else(|| AppError::Config(format!("Invalid utc_offset: {}", s))),
            None => Ok(*Local::now().offset()),
        }
    }

    pub fn schedule(&self) -> AppResult<Schedule> {
        let mut windows = Vec::with_capacity(self.schedule.len());
        for w in &self.schedule {
            let start = parse_time_to_seconds(&w.start)?;
            let end = parse_time_to_seconds(&w.end)?;
            if end <= start {
                return Err(AppError::Config(format!(
                    "Schedule window {}-{} ends before it starts",
                    w.start, w.end
                )));
            }
            windows.push(Window { start, end });
        }

        if self.checkpoints.len() != CHECKPOINT_COUNT {
            return Err(AppError::Config(format!(
                "Expected {} checkpoints, found {}",
                CHECKPOINT_COUNT,
                self.checkpoints.len()
            )));
        }
        let checkpoints = self
            .checkpoints
            .iter()
            .map(|c| parse_time_to_seconds(c))
            .collect::<AppResult<Vec<i64>>>()?;

        Ok(Schedule {
            windows,
            checkpoints,
        })
    }

    pub fn reserved_labels(&self) -> ReservedLabels {
        ReservedLabels {
            break_labels: self.break_labels.clone(),
            day_end_labels: self.day_end_labels.clone(),
        }
    }

    /// Build the reconciler for this deployment.
    pub fn reconciler(&self) -> AppResult<Reconciler> {
        Ok(Reconciler::new(
            self.policy,
            self.schedule()?,
            self.reserved_labels(),
            self.offset()?,
        ))
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config::with_database(db_path.clone());

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}
