use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::Dhikr;

fn default_subhan_allah_target() -> u32 {
    33
}
fn default_alhamdulillah_target() -> u32 {
    33
}
fn default_allahu_akbar_target() -> u32 {
    34
}
fn default_weekly_goal() -> u32 {
    150
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Overrides the platform data directory that holds `tadhkir.db`.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TasbeehConfig {
    #[serde(default = "default_subhan_allah_target")]
    pub subhan_allah_target: u32,
    #[serde(default = "default_alhamdulillah_target")]
    pub alhamdulillah_target: u32,
    #[serde(default = "default_allahu_akbar_target")]
    pub allahu_akbar_target: u32,
}

impl TasbeehConfig {
    pub fn target(&self, dhikr: Dhikr) -> u32 {
        match dhikr {
            Dhikr::SubhanAllah => self.subhan_allah_target,
            Dhikr::Alhamdulillah => self.alhamdulillah_target,
            Dhikr::AllahuAkbar => self.allahu_akbar_target,
        }
    }
}

impl Default for TasbeehConfig {
    fn default() -> Self {
        Self {
            subhan_allah_target: default_subhan_allah_target(),
            alhamdulillah_target: default_alhamdulillah_target(),
            allahu_akbar_target: default_allahu_akbar_target(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VirtueConfig {
    #[serde(default = "default_weekly_goal")]
    pub weekly_goal: u32,
}

impl Default for VirtueConfig {
    fn default() -> Self {
        Self {
            weekly_goal: default_weekly_goal(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Days to add/subtract from the Hijri date for local moon sighting.
    /// 0 = default (Saudi), -1 = one day behind, +1 = one day ahead
    #[serde(default)]
    pub hijri_offset: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub tasbeeh: TasbeehConfig,
    #[serde(default)]
    pub virtue: VirtueConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "tadhkir").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.storage.data_dir {
            return Ok(dir.clone());
        }
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn db_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("tadhkir.db"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(&path).with_context(|| format!("Reading {:?}", path))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Parsing config.toml")
    }

    pub fn ensure_data_dir(&self) -> Result<PathBuf> {
        let dir = self.data_dir()?;
        std::fs::create_dir_all(&dir).with_context(|| format!("Creating {:?}", dir))?;
        Ok(dir)
    }
}
