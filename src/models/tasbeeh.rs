use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dhikr {
    SubhanAllah,
    Alhamdulillah,
    AllahuAkbar,
}

impl Dhikr {
    pub fn all() -> [Dhikr; 3] {
        [Dhikr::SubhanAllah, Dhikr::Alhamdulillah, Dhikr::AllahuAkbar]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Dhikr::SubhanAllah => "SubhanAllah",
            Dhikr::Alhamdulillah => "Alhamdulillah",
            Dhikr::AllahuAkbar => "Allahu Akbar",
        }
    }

    pub fn arabic(&self) -> &'static str {
        match self {
            Dhikr::SubhanAllah => "سُبْحَانَ ٱللَّٰهِ",
            Dhikr::Alhamdulillah => "ٱلْحَمْدُ لِلَّٰهِ",
            Dhikr::AllahuAkbar => "ٱللَّٰهُ أَكْبَرُ",
        }
    }

    pub fn meaning(&self) -> &'static str {
        match self {
            Dhikr::SubhanAllah => "Glory be to Allah",
            Dhikr::Alhamdulillah => "All praise is due to Allah",
            Dhikr::AllahuAkbar => "Allah is the Greatest",
        }
    }
}

impl FromStr for Dhikr {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "subhanallah" | "s" => Ok(Dhikr::SubhanAllah),
            "alhamdulillah" | "a" => Ok(Dhikr::Alhamdulillah),
            "allahuakbar" | "takbir" | "k" => Ok(Dhikr::AllahuAkbar),
            _ => Err(anyhow::anyhow!(
                "Unknown dhikr '{}'. Use: subhanallah, alhamdulillah, allahuakbar",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasbeehCounts {
    #[serde(rename = "subhanAllah", default)]
    pub subhan_allah: u32,
    #[serde(default)]
    pub alhamdulillah: u32,
    #[serde(rename = "allahuAkbar", default)]
    pub allahu_akbar: u32,
}

impl TasbeehCounts {
    pub fn get(&self, dhikr: Dhikr) -> u32 {
        match dhikr {
            Dhikr::SubhanAllah => self.subhan_allah,
            Dhikr::Alhamdulillah => self.alhamdulillah,
            Dhikr::AllahuAkbar => self.allahu_akbar,
        }
    }

    pub fn slot_mut(&mut self, dhikr: Dhikr) -> &mut u32 {
        match dhikr {
            Dhikr::SubhanAllah => &mut self.subhan_allah,
            Dhikr::Alhamdulillah => &mut self.alhamdulillah,
            Dhikr::AllahuAkbar => &mut self.allahu_akbar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_loose_dhikr_names() {
        assert_eq!("SubhanAllah".parse::<Dhikr>().unwrap(), Dhikr::SubhanAllah);
        assert_eq!("allahu-akbar".parse::<Dhikr>().unwrap(), Dhikr::AllahuAkbar);
        assert_eq!("a".parse::<Dhikr>().unwrap(), Dhikr::Alhamdulillah);
        assert!("astaghfirullah".parse::<Dhikr>().is_err());
    }

    #[test]
    fn counts_json_shape() {
        let mut c = TasbeehCounts::default();
        *c.slot_mut(Dhikr::AllahuAkbar) = 4;
        assert_eq!(
            serde_json::to_string(&c).unwrap(),
            r#"{"subhanAllah":0,"alhamdulillah":0,"allahuAkbar":4}"#
        );
    }
}
