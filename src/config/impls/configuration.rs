use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use regex::Regex;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::federation_config::FederationConfig;
use crate::config::structs::liveness_config::LivenessConfig;
use crate::config::structs::peer_config::PeerConfig;
use crate::config::structs::tracker_config::TrackerConfig;

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker: TrackerConfig {
                udp_bind_address: String::from("0.0.0.0:6881"),
                udp_workers: 64,
                recv_buffer_size: 262_144,
                send_buffer_size: 262_144,
                reuse_address: true,
            },
            liveness: LivenessConfig {
                interval: 20,
                probe_timeout_ms: 5000,
                probe_attempts: 3,
                max_concurrent_probes: 32,
            },
            federation: FederationConfig {
                membership_bind_address: String::from("0.0.0.0:6882"),
                lookup_bind_address: String::from("0.0.0.0:6883"),
                advertised_address: String::new(),
                seed_trackers: Vec::new(),
                connect_timeout_ms: 3000,
                max_connections: 16,
            },
            peer: PeerConfig {
                server_port: 6885,
                ping_bind_address: String::from("0.0.0.0:6884"),
                upload_workers: 5,
                buffer_size: 4096,
                max_listeners: 16,
                download_dir: String::from("."),
                tracker_timeout_ms: 5000,
                query_timeout_ms: 5000,
                transfer_timeout_ms: 10000,
                default_tracker_port: 6881,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    /// Loads and validates `path`. When the file is missing or broken and `create` is set,
    /// a default file is written and [`ConfigurationError::Created`] is returned so the
    /// operator can review it before starting for real.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(error);
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init())?;
                Configuration::save_file(path, config_toml)?;
                return Err(ConfigurationError::Created(path.to_string()));
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        Self::validate_value("log_level", &self.log_level, r"^(off|trace|debug|info|warn|error)$")?;

        let addresses = [
            ("tracker.udp_bind_address", &self.tracker.udp_bind_address),
            ("federation.membership_bind_address", &self.federation.membership_bind_address),
            ("federation.lookup_bind_address", &self.federation.lookup_bind_address),
            ("peer.ping_bind_address", &self.peer.ping_bind_address),
        ];
        for (name, value) in addresses {
            if value.parse::<SocketAddr>().is_err() {
                return Err(ConfigurationError::InvalidValue { name, value: value.clone(), reason: "is not a socket address" });
            }
        }
        for seed in &self.federation.seed_trackers {
            Self::validate_value("federation.seed_trackers.membership_address", &seed.membership_address, r"^\S+:\d{1,5}$")?;
            Self::validate_value("federation.seed_trackers.lookup_address", &seed.lookup_address, r"^\S+:\d{1,5}$")?;
        }
        if !self.federation.advertised_address.is_empty() {
            Self::validate_value("federation.advertised_address", &self.federation.advertised_address, r"^\S+:\d{1,5}$")?;
        }

        let counts = [
            ("tracker.udp_workers", self.tracker.udp_workers as u64),
            ("liveness.interval", self.liveness.interval),
            ("liveness.probe_attempts", self.liveness.probe_attempts as u64),
            ("liveness.max_concurrent_probes", self.liveness.max_concurrent_probes as u64),
            ("federation.max_connections", self.federation.max_connections as u64),
            ("peer.upload_workers", self.peer.upload_workers as u64),
            ("peer.buffer_size", self.peer.buffer_size as u64),
            ("peer.max_listeners", self.peer.max_listeners as u64),
            ("peer.transfer_timeout_ms", self.peer.transfer_timeout_ms),
        ];
        for (name, value) in counts {
            if value == 0 {
                return Err(ConfigurationError::InvalidValue { name, value: value.to_string(), reason: "must be greater than zero" });
            }
        }
        Ok(())
    }

    pub fn validate_value(name: &'static str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex).map_err(|_| ConfigurationError::InvalidValue {
            name,
            value: regex.to_string(),
            reason: "has an invalid validation pattern",
        })?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::InvalidValue { name, value: value.to_string(), reason: "has an invalid format" });
        }
        Ok(())
    }
}
