use crate::errors::{AppError, AppResult};
use crate::models::WorkSchedule;
use crate::utils::date::parse_date;
use crate::utils::time::validate_time;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Which weekdays count as working days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDays {
    #[serde(default)]
    pub sunday: bool,
    #[serde(default = "default_on")]
    pub monday: bool,
    #[serde(default = "default_on")]
    pub tuesday: bool,
    #[serde(default = "default_on")]
    pub wednesday: bool,
    #[serde(default = "default_on")]
    pub thursday: bool,
    #[serde(default = "default_on")]
    pub friday: bool,
    #[serde(default)]
    pub saturday: bool,
}

fn default_on() -> bool {
    true
}

impl Default for WorkingDays {
    fn default() -> Self {
        Self {
            sunday: false,
            monday: true,
            tuesday: true,
            wednesday: true,
            thursday: true,
            friday: true,
            saturday: false,
        }
    }
}

impl WorkingDays {
    /// Indexed 0 = Sunday .. 6 = Saturday, matching `chrono`'s
    /// `num_days_from_sunday`.
    pub fn as_array(&self) -> [bool; 7] {
        [
            self.sunday,
            self.monday,
            self.tuesday,
            self.wednesday,
            self.thursday,
            self.friday,
            self.saturday,
        ]
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: String,
    #[serde(default)]
    pub working_days: WorkingDays,
    #[serde(default)]
    pub count_today: bool,
    #[serde(default = "default_balance_start_date")]
    pub overall_balance_start_date: String,
}

fn default_hours_per_day() -> String {
    "08:00".to_string()
}

fn default_balance_start_date() -> String {
    "2019-01-01".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            hours_per_day: default_hours_per_day(),
            working_days: WorkingDays::default(),
            count_today: false,
            overall_balance_start_date: default_balance_start_date(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rtimebalance")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimebalance.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimebalance.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::create_dir_all(Self::config_dir())?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }

    /// Validate the fields the engine computes from.
    pub fn check(&self) -> AppResult<()> {
        if !validate_time(&self.hours_per_day) || self.hours_per_day.starts_with('-') {
            return Err(AppError::Config(format!(
                "hours_per_day must be a non-negative HH:MM time, got '{}'",
                self.hours_per_day
            )));
        }
        if parse_date(&self.overall_balance_start_date).is_none() {
            return Err(AppError::Config(format!(
                "overall_balance_start_date must be YYYY-MM-DD, got '{}'",
                self.overall_balance_start_date
            )));
        }
        Ok(())
    }

    /// Lower the file-level settings to the engine's schedule value.
    pub fn schedule(&self) -> WorkSchedule {
        let fallback = WorkSchedule::default();
        WorkSchedule {
            working_days: self.working_days.as_array(),
            hours_per_day: self.hours_per_day.clone(),
            count_today: self.count_today,
            balance_start_date: parse_date(&self.overall_balance_start_date)
                .unwrap_or(fallback.balance_start_date),
        }
    }
}
