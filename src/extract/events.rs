use serde::Serialize;
use crate::{
    coordinate::Coordinate,
    error::ExtractionError,
    schema::{fields, EventKind, LogSchema},
    table::Table,
};
use super::{EventExtractor, FieldReader, LineShape};


/// Position of one neuron
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopologyRow {
    pub neuron_id: String,
    pub x1: f64,
    pub x2: f64,
    pub x3: f64,
}

/// A directed connection between two placed neurons
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub presynaptic_id: String,
    pub presynaptic_coordinate: Coordinate,
    pub postsynaptic_id: String,
    pub postsynaptic_coordinate: Coordinate,
    pub initial_weight: f64,
}

impl Connection {
    /// Flattens the connection into a table row
    pub fn to_row(&self) -> ConnectionRow {
        ConnectionRow {
            presynaptic_id: self.presynaptic_id.clone(),
            postsynaptic_id: self.postsynaptic_id.clone(),
            initial_weight: self.initial_weight,
            pre_x1: self.presynaptic_coordinate.x1,
            pre_x2: self.presynaptic_coordinate.x2,
            pre_x3: self.presynaptic_coordinate.x3,
            post_x1: self.postsynaptic_coordinate.x1,
            post_x2: self.postsynaptic_coordinate.x2,
            post_x3: self.postsynaptic_coordinate.x3,
        }
    }

    /// Distance between the two neurons
    pub fn length(&self) -> f64 {
        self.presynaptic_coordinate.distance(&self.postsynaptic_coordinate)
    }
}

/// Flattened [`Connection`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionRow {
    pub presynaptic_id: String,
    pub postsynaptic_id: String,
    pub initial_weight: f64,
    pub pre_x1: f64,
    pub pre_x2: f64,
    pub pre_x3: f64,
    pub post_x1: f64,
    pub post_x2: f64,
    pub post_x3: f64,
}

impl ConnectionRow {
    pub fn connection(&self) -> Connection {
        Connection {
            presynaptic_id: self.presynaptic_id.clone(),
            presynaptic_coordinate: Coordinate::new(self.pre_x1, self.pre_x2, self.pre_x3),
            postsynaptic_id: self.postsynaptic_id.clone(),
            postsynaptic_coordinate: Coordinate::new(self.post_x1, self.post_x2, self.post_x3),
            initial_weight: self.initial_weight,
        }
    }
}

/// Signal received by a postsynaptic neuron
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalRow {
    pub presynaptic_id: String,
    pub postsynaptic_id: String,
    pub signal_time: f64,
    pub last_event_time: f64,
    pub last_fire_time: f64,
    pub signal_intensity: f64,
}

/// Weight update of a connection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningRow {
    pub presynaptic_id: String,
    pub postsynaptic_id: String,
    pub signal_time: f64,
    pub previous_weight: f64,
    pub new_weight: f64,
    pub adjustment: f64,
    pub time_window: f64,
    pub stdp_time: f64,
}

/// Membrane potential of a neuron after an update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembranePotentialRow {
    pub neuron_id: String,
    pub signal_time: f64,
    pub last_event_time: f64,
    pub last_fire_time: f64,
    pub potential: f64,
}

/// Spike of a neuron
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpikeRow {
    pub neuron_id: String,
    pub signal_time: f64,
    pub signal_intensity: f64,
    pub last_fire_time: f64,
}

/// Intrinsic plasticity (bias) of a neuron at a point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntrinsicPlasticityRow {
    pub neuron_id: String,
    pub timestamp: f64,
    pub intrinsic_plasticity: f64,
}

macro_rules! event_extractor {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            schema: LogSchema,
            shape: LineShape,
        }

        impl $name {
            pub fn new(schema: &LogSchema) -> Self {
                $name {
                    schema: schema.clone(),
                    shape: LineShape::for_event(schema, $kind),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::new(&LogSchema::default())
            }
        }
    };
}

event_extractor!(
    /// Extracts neuron positions from `topology; neuron_id: ...; location: ...` lines
    TopologyExtractor, EventKind::Topology
);
event_extractor!(
    /// Extracts connections from `networkConnected` lines
    ConnectionExtractor, EventKind::Connection
);
event_extractor!(
    /// Extracts received signals from `receive` lines
    SignalExtractor, EventKind::Signal
);
event_extractor!(
    /// Extracts weight updates from `learn` lines
    LearningExtractor, EventKind::Learning
);
event_extractor!(
    /// Extracts membrane potentials from `update` lines
    MembranePotentialExtractor, EventKind::MembranePotential
);
event_extractor!(
    /// Extracts spikes from `fire` lines
    SpikeExtractor, EventKind::Spike
);
event_extractor!(
    /// Extracts intrinsic plasticity updates from `intrinsicPlasticity` lines
    IntrinsicPlasticityExtractor, EventKind::IntrinsicPlasticity
);

impl EventExtractor for TopologyExtractor {
    type Row = TopologyRow;

    fn kind(&self) -> EventKind { EventKind::Topology }
    fn schema(&self) -> &LogSchema { &self.schema }
    fn shape(&self) -> &LineShape { &self.shape }

    fn build_row(&self, reader: &FieldReader) -> Result<TopologyRow, ExtractionError> {
        let location = reader.coordinate(fields::LOCATION)?;

        Ok(
            TopologyRow {
                neuron_id: reader.text(fields::NEURON_ID)?,
                x1: location.x1,
                x2: location.x2,
                x3: location.x3,
            }
        )
    }
}

impl ConnectionExtractor {
    fn build_connection(&self, reader: &FieldReader) -> Result<Connection, ExtractionError> {
        Ok(
            Connection {
                presynaptic_id: reader.text(fields::PRE_SYNAPTIC)?,
                presynaptic_coordinate: reader.coordinate(fields::PRE_SYNAPTIC_LOCATION)?,
                postsynaptic_id: reader.text(fields::POST_SYNAPTIC)?,
                postsynaptic_coordinate: reader.coordinate(fields::POST_SYNAPTIC_LOCATION)?,
                initial_weight: reader.number(fields::INITIAL_WEIGHT)?,
            }
        )
    }

    /// Extracts connections with their coordinates kept together
    pub fn extract_connections<S: AsRef<str>>(&self, lines: &[S]) -> Result<Vec<Connection>, ExtractionError> {
        let table: Table<ConnectionRow> = self.extract(lines)?;

        Ok(table.iter().map(|row| row.connection()).collect())
    }
}

impl EventExtractor for ConnectionExtractor {
    type Row = ConnectionRow;

    fn kind(&self) -> EventKind { EventKind::Connection }
    fn schema(&self) -> &LogSchema { &self.schema }
    fn shape(&self) -> &LineShape { &self.shape }

    fn build_row(&self, reader: &FieldReader) -> Result<ConnectionRow, ExtractionError> {
        Ok(self.build_connection(reader)?.to_row())
    }
}

impl EventExtractor for SignalExtractor {
    type Row = SignalRow;

    fn kind(&self) -> EventKind { EventKind::Signal }
    fn schema(&self) -> &LogSchema { &self.schema }
    fn shape(&self) -> &LineShape { &self.shape }

    fn build_row(&self, reader: &FieldReader) -> Result<SignalRow, ExtractionError> {
        Ok(
            SignalRow {
                presynaptic_id: reader.text(fields::SOURCE)?,
                postsynaptic_id: reader.text(fields::ID)?,
                signal_time: reader.number(fields::TIMESTAMP)?,
                last_event_time: reader.number(fields::LAST_EVENT)?,
                last_fire_time: reader.number(fields::LAST_FIRE)?,
                signal_intensity: reader.number(fields::SIGNAL_INTENSITY)?,
            }
        )
    }
}

impl EventExtractor for LearningExtractor {
    type Row = LearningRow;

    fn kind(&self) -> EventKind { EventKind::Learning }
    fn schema(&self) -> &LogSchema { &self.schema }
    fn shape(&self) -> &LineShape { &self.shape }

    fn build_row(&self, reader: &FieldReader) -> Result<LearningRow, ExtractionError> {
        Ok(
            LearningRow {
                presynaptic_id: reader.text(fields::SOURCE)?,
                postsynaptic_id: reader.text(fields::ID)?,
                signal_time: reader.number(fields::SIGNAL_TIME)?,
                previous_weight: reader.number(fields::PREVIOUS_WEIGHT)?,
                new_weight: reader.number(fields::NEW_WEIGHT)?,
                adjustment: reader.number(fields::ADJUSTMENT)?,
                time_window: reader.number(fields::TIME_WINDOW)?,
                stdp_time: reader.number(fields::STDP_TIME)?,
            }
        )
    }
}

impl EventExtractor for MembranePotentialExtractor {
    type Row = MembranePotentialRow;

    fn kind(&self) -> EventKind { EventKind::MembranePotential }
    fn schema(&self) -> &LogSchema { &self.schema }
    fn shape(&self) -> &LineShape { &self.shape }

    fn build_row(&self, reader: &FieldReader) -> Result<MembranePotentialRow, ExtractionError> {
        Ok(
            MembranePotentialRow {
                neuron_id: reader.text(fields::ID)?,
                signal_time: reader.number(fields::SIGNAL_TIMESTAMP)?,
                last_event_time: reader.number(fields::LAST_EVENT)?,
                last_fire_time: reader.number(fields::LAST_FIRE)?,
                potential: reader.number(fields::POTENTIAL)?,
            }
        )
    }
}

impl EventExtractor for SpikeExtractor {
    type Row = SpikeRow;

    fn kind(&self) -> EventKind { EventKind::Spike }
    fn schema(&self) -> &LogSchema { &self.schema }
    fn shape(&self) -> &LineShape { &self.shape }

    fn build_row(&self, reader: &FieldReader) -> Result<SpikeRow, ExtractionError> {
        Ok(
            SpikeRow {
                neuron_id: reader.text(fields::ID)?,
                signal_time: reader.number(fields::TIMESTAMP)?,
                signal_intensity: reader.number(fields::SIGNAL_INTENSITY)?,
                last_fire_time: reader.number(fields::LAST_FIRE)?,
            }
        )
    }
}

impl EventExtractor for IntrinsicPlasticityExtractor {
    type Row = IntrinsicPlasticityRow;

    fn kind(&self) -> EventKind { EventKind::IntrinsicPlasticity }
    fn schema(&self) -> &LogSchema { &self.schema }
    fn shape(&self) -> &LineShape { &self.shape }

    fn build_row(&self, reader: &FieldReader) -> Result<IntrinsicPlasticityRow, ExtractionError> {
        Ok(
            IntrinsicPlasticityRow {
                neuron_id: reader.text(fields::ID)?,
                timestamp: reader.number(fields::TIMESTAMP)?,
                intrinsic_plasticity: reader.number(fields::INTRINSIC_PLASTICITY)?,
            }
        )
    }
}
