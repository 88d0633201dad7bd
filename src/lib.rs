//! # Spiking Neural Network Logs
//!
//! `spiking_neural_network_logs` turns the text event logs written by a spiking
//! neural network simulator into typed tables that can be queried, grouped and
//! exported, and reconstructs the spike time dependent plasticity (STDP) kernel
//! a network learned with from the parameters logged in its header.
//!
//! Every event is one line of the form
//!
//! ```text
//! <preamble> - <command>; <key>: <value>[ <unit>]; <key>: <value>[ <unit>]; ...
//! ```
//!
//! and is turned into one row of the table of its kind: topology, connections,
//! received signals, weight updates, membrane potentials, spikes and intrinsic
//! plasticity updates. Unrelated lines interleaved in the log are skipped.
//!
//! ## Example Code
//!
//! ### Extracting tables from a run
//!
//! ```rust
//! use spiking_neural_network_logs::{
//!     extract::{EventExtractor, LearningExtractor, NetworkInfoExtractor, SpikeExtractor},
//!     schema::LogSchema,
//!     stdp::{STDPKernel, LearningWindow, time_axis},
//! };
//!
//! let lines = vec![
//!     "2024-01-01 - summary; neurons: 2; connections: 1",
//!     "2024-01-01 - learning; learning_type: stdp_hard; inhibitory_amplitude: 0.5; inhibitory_period: 10 ms; excitation_amplitude: 1.0; excitation_period: 10 ms",
//!     "2024-01-01 - fire; id: n1; timestamp: 74.0 ms; signal_intensity: -0.5 mV; last_fire: 0.0 ms",
//!     "2024-01-01 - learn; id: n2; source: n1; previous_weight: 0.5; new_weight: 0.6; adjustment: 0.1; time_window: 20 ms; stdp_time: 3 ms; signal_time: 75 ms",
//! ];
//!
//! let schema = LogSchema::default();
//!
//! let spikes = SpikeExtractor::new(&schema).extract(&lines).unwrap();
//! let learning = LearningExtractor::new(&schema).extract(&lines).unwrap();
//! assert_eq!(spikes.len(), 1);
//! assert_eq!(learning.rows()[0].new_weight, 0.6);
//!
//! let metadata = NetworkInfoExtractor::new(&schema).extract(&lines);
//! let kernel = STDPKernel::from_metadata(&metadata, &schema).unwrap();
//! let window = LearningWindow { time_window: 20., weight: 0.5, max_weight: 1. };
//! let curve = kernel.curve(&time_axis(-20., 20., 1.).unwrap(), &window);
//! assert_eq!(curve.len(), 40);
//! ```
//!
//! ### Extracting a table for every run of a series
//!
//! ```rust
//! use std::collections::HashMap;
//! use spiking_neural_network_logs::{
//!     extract::{EventExtractor, MembranePotentialExtractor},
//!     series::aggregate_series,
//! };
//!
//! let runs = HashMap::from([
//!     (1, vec!["t - update; id: a; signal_timestamp: 1 ms; last_event: 0 ms; last_fire: 0 ms; potential: -70 mV"]),
//!     (2, vec![]),
//! ]);
//!
//! let extractor = MembranePotentialExtractor::default();
//! let series = aggregate_series(&runs, |lines| extractor.extract(lines), true).unwrap();
//!
//! for (run, table) in series.iter() {
//!     println!("run {}: {} potentials", run, table.len());
//! }
//! ```

pub mod coordinate;
pub mod error;
pub mod extract;
pub mod lexer;
pub mod schema;
pub mod series;
pub mod stdp;
pub mod table;
