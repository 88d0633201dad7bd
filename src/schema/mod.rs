//! The command names, attribute keys and unit suffixes every extractor consults.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    fs::read_to_string,
    path::Path,
};
use serde::Deserialize;
use crate::error::ConfigError;


/// Attribute keys as they appear in simulator logs
pub mod fields {
    pub const ID: &str = "id";
    pub const SOURCE: &str = "source";
    pub const NEURON_ID: &str = "neuron_id";
    pub const LOCATION: &str = "location";
    pub const PRE_SYNAPTIC: &str = "pre_synaptic";
    pub const POST_SYNAPTIC: &str = "post_synaptic";
    pub const INITIAL_WEIGHT: &str = "initial_weight";
    pub const PRE_SYNAPTIC_LOCATION: &str = "pre_synaptic_location";
    pub const POST_SYNAPTIC_LOCATION: &str = "post_synaptic_location";
    pub const TIMESTAMP: &str = "timestamp";
    pub const SIGNAL_TIMESTAMP: &str = "signal_timestamp";
    pub const SIGNAL_TIME: &str = "signal_time";
    pub const LAST_EVENT: &str = "last_event";
    pub const LAST_FIRE: &str = "last_fire";
    pub const SIGNAL_INTENSITY: &str = "signal_intensity";
    pub const PREVIOUS_WEIGHT: &str = "previous_weight";
    pub const NEW_WEIGHT: &str = "new_weight";
    pub const ADJUSTMENT: &str = "adjustment";
    pub const TIME_WINDOW: &str = "time_window";
    pub const STDP_TIME: &str = "stdp_time";
    pub const POTENTIAL: &str = "potential";
    pub const INTRINSIC_PLASTICITY: &str = "intrinsicPlasticity";

    pub const LEARNING_TYPE: &str = "learning_type";
    pub const INHIBITORY_AMPLITUDE: &str = "inhibitory_amplitude";
    pub const INHIBITORY_PERIOD: &str = "inhibitory_period";
    pub const EXCITATION_AMPLITUDE: &str = "excitation_amplitude";
    pub const EXCITATION_PERIOD: &str = "excitation_period";
    pub const BASELINE: &str = "baseline";
    pub const TIME_CONSTANT: &str = "time_constant";
    pub const LEARNING_RATE: &str = "learning_rate";
}

/// Every command a simulator log line may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Summary,
    Topology,
    Learning,
    NetworkConnected,
    Receive,
    IntrinsicPlasticity,
    Learn,
    Update,
    Fire,
}

/// Header sections folded into network metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetadataSection {
    Summary,
    Topology,
    Learning,
}

impl MetadataSection {
    pub const ALL: [MetadataSection; 3] = [
        MetadataSection::Summary, MetadataSection::Topology, MetadataSection::Learning,
    ];
}

impl Display for MetadataSection {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        let name = match self {
            MetadataSection::Summary => "summary",
            MetadataSection::Topology => "topology",
            MetadataSection::Learning => "learning",
        };

        write!(f, "{}", name)
    }
}

/// Kinds of event tables that can be extracted from a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Topology,
    Connection,
    Signal,
    Learning,
    MembranePotential,
    Spike,
    IntrinsicPlasticity,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::Topology,
        EventKind::Connection,
        EventKind::Signal,
        EventKind::Learning,
        EventKind::MembranePotential,
        EventKind::Spike,
        EventKind::IntrinsicPlasticity,
    ];

    /// Command that introduces this kind of event
    pub fn command(&self) -> Command {
        match self {
            EventKind::Topology => Command::Topology,
            EventKind::Connection => Command::NetworkConnected,
            EventKind::Signal => Command::Receive,
            EventKind::Learning => Command::Learn,
            EventKind::MembranePotential => Command::Update,
            EventKind::Spike => Command::Fire,
            EventKind::IntrinsicPlasticity => Command::IntrinsicPlasticity,
        }
    }

    /// Attribute keys a line must carry to be considered an event of this kind
    pub fn required_fields(&self) -> &'static [&'static str] {
        use fields::*;

        match self {
            EventKind::Topology => &[NEURON_ID, LOCATION],
            EventKind::Connection => &[
                PRE_SYNAPTIC, POST_SYNAPTIC, INITIAL_WEIGHT,
                PRE_SYNAPTIC_LOCATION, POST_SYNAPTIC_LOCATION,
            ],
            EventKind::Signal => &[
                ID, SOURCE, TIMESTAMP, LAST_EVENT, LAST_FIRE, SIGNAL_INTENSITY,
            ],
            EventKind::Learning => &[
                ID, SOURCE, PREVIOUS_WEIGHT, NEW_WEIGHT, ADJUSTMENT,
                TIME_WINDOW, STDP_TIME, SIGNAL_TIME,
            ],
            EventKind::MembranePotential => &[
                ID, SIGNAL_TIMESTAMP, LAST_EVENT, LAST_FIRE, POTENTIAL,
            ],
            EventKind::Spike => &[ID, TIMESTAMP, SIGNAL_INTENSITY, LAST_FIRE],
            EventKind::IntrinsicPlasticity => &[ID, TIMESTAMP, INTRINSIC_PLASTICITY],
        }
    }
}

/// Command tokens as written by the simulator
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CommandNames {
    pub summary: String,
    pub topology: String,
    pub learning: String,
    pub network_connected: String,
    pub receive: String,
    pub intrinsic_plasticity: String,
    pub learn: String,
    pub update: String,
    pub fire: String,
}

impl Default for CommandNames {
    fn default() -> Self {
        CommandNames {
            summary: String::from("summary"),
            topology: String::from("topology"),
            learning: String::from("learning"),
            network_connected: String::from("networkConnected"),
            receive: String::from("receive"),
            intrinsic_plasticity: String::from("intrinsicPlasticity"),
            learn: String::from("learn"),
            update: String::from("update"),
            fire: String::from("fire"),
        }
    }
}

impl CommandNames {
    /// Token for the given command
    pub fn name(&self, command: Command) -> &str {
        match command {
            Command::Summary => &self.summary,
            Command::Topology => &self.topology,
            Command::Learning => &self.learning,
            Command::NetworkConnected => &self.network_connected,
            Command::Receive => &self.receive,
            Command::IntrinsicPlasticity => &self.intrinsic_plasticity,
            Command::Learn => &self.learn,
            Command::Update => &self.update,
            Command::Fire => &self.fire,
        }
    }

    /// Looks up which command a token names, if any
    pub fn command(&self, token: &str) -> Option<Command> {
        [
            Command::Summary, Command::Topology, Command::Learning,
            Command::NetworkConnected, Command::Receive, Command::IntrinsicPlasticity,
            Command::Learn, Command::Update, Command::Fire,
        ].into_iter()
            .find(|command| self.name(*command) == token)
    }
}

/// Schema shared by all extractors, can be read from TOML where any
/// missing key falls back to its default
///
/// ```rust
/// use spiking_neural_network_logs::schema::{Command, LogSchema};
///
/// let schema = LogSchema::from_toml_str(r#"
///     units = ["ms", "mV"]
///
///     [commands]
///     fire = "spike"
/// "#).unwrap();
///
/// assert_eq!(schema.commands.name(Command::Fire), "spike");
/// assert_eq!(schema.commands.name(Command::Learn), "learn");
/// assert!(schema.parallel);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogSchema {
    /// Command tokens
    pub commands: CommandNames,
    /// Unit suffixes stripped from values before numeric parsing
    pub units: Vec<String>,
    /// Use `true` to extract runs of a series on parallel workers
    pub parallel: bool,
}

impl Default for LogSchema {
    fn default() -> Self {
        LogSchema {
            commands: CommandNames::default(),
            units: ["ms", "mV", "µm", "μm", "um"].iter()
                .map(|unit| String::from(*unit))
                .collect(),
            parallel: true,
        }
    }
}

impl LogSchema {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = read_to_string(path)?;

        LogSchema::from_toml_str(&contents)
    }

    /// Removes a trailing unit suffix from a value if it has one of the known units
    pub fn strip_unit<'a>(&self, value: &'a str) -> &'a str {
        let value = value.trim();

        for unit in self.units.iter() {
            if let Some(stripped) = value.strip_suffix(unit.as_str()) {
                // bare unit is left untouched
                if stripped.is_empty() {
                    continue;
                }

                return stripped.trim_end();
            }
        }

        value
    }
}
