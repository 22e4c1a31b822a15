use std::fs;
use std::io::Read;
use std::process;

#[derive(Debug, Clone)]
pub struct Config {
    pub uppercase: bool,
    pub chunk_size: usize,
}

#[derive(Serialize, Deserialize)]
pub struct ConfigFile {
    pub uppercase: Option<bool>,
    pub chunk_size: Option<usize>,
}

impl Config {
    pub fn from_file(file: ConfigFile) -> Config {
        let mut base: Config = Default::default();
        if let Some(u) = file.uppercase {
            base.uppercase = u;
        }
        if let Some(c) = file.chunk_size {
            if c > 0 {
                base.chunk_size = c;
            }
        }
        base
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            // The firmware stub printed digests uppercase.
            uppercase: true,
            chunk_size: 64 * 1024,
        }
    }
}

pub fn load(explicit: Option<&str>) -> Config {
    enum EK {
        Nonext,
        IO,
        Fmt,
    }

    let defaults = [
        "./hashguard.toml",
        "$XDG_CONFIG_HOME/hashguard.toml",
        "~/.config/hashguard.toml",
    ];
    let files: Vec<&str> = match explicit {
        Some(f) => vec![f],
        None => defaults.to_vec(),
    };

    for file in &files {
        let mut s = String::new();
        let res = shellexpand::full(&file)
            .map_err(|_| EK::Nonext)
            .and_then(|p| fs::File::open(&*p).map_err(|_| EK::Nonext))
            .and_then(|mut f| f.read_to_string(&mut s).map_err(|_| EK::IO))
            .and_then(|_| toml::from_str(&s).map_err(|_| EK::Fmt));
        match res {
            Ok(cfg) => return Config::from_file(cfg),
            Err(EK::Fmt) => {
                eprintln!("Failed to parse config {}, terminating", file);
                process::exit(1);
            }
            Err(EK::IO) => {
                eprintln!("Failed to load {}, IO error!", file);
            }
            Err(EK::Nonext) => {
                // A config named on the command line must exist.
                if explicit.is_some() {
                    eprintln!("Config file {} not found, terminating", file);
                    process::exit(1);
                }
            }
        }
    }
    Default::default()
}
