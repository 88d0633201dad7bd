use std::collections::BTreeMap;
use tracing::debug;
use crate::{
    lexer::{lex_line, AttributeMap},
    schema::{fields, Command, LogSchema, MetadataSection},
};
use super::command_token;


/// Header attributes of a run, keyed by section
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NetworkMetadata {
    sections: BTreeMap<MetadataSection, AttributeMap>,
}

impl NetworkMetadata {
    /// Sets the attributes of a section, replacing any earlier ones
    pub fn insert(&mut self, section: MetadataSection, attributes: AttributeMap) {
        self.sections.insert(section, attributes);
    }

    pub fn section(&self, section: MetadataSection) -> Option<&AttributeMap> {
        self.sections.get(&section)
    }

    pub fn get(&self, section: MetadataSection, key: &str) -> Option<&str> {
        self.section(section)
            .and_then(|attributes| attributes.get(key))
            .map(|value| value.as_str())
    }

    /// Raw `learning_type` of the learning section
    pub fn learning_type(&self) -> Option<&str> {
        self.get(MetadataSection::Learning, fields::LEARNING_TYPE)
    }

    pub fn contains(&self, section: MetadataSection) -> bool {
        self.sections.contains_key(&section)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Folds the `summary`, `topology` and `learning` header lines of a run into
/// [`NetworkMetadata`], per-neuron `topology` lines are not part of the header
/// and a later header line replaces an earlier one of the same section
#[derive(Debug, Clone, Default)]
pub struct NetworkInfoExtractor {
    schema: LogSchema,
}

impl NetworkInfoExtractor {
    pub fn new(schema: &LogSchema) -> Self {
        NetworkInfoExtractor { schema: schema.clone() }
    }

    fn header_section(&self, line: &str) -> Option<MetadataSection> {
        let command = self.schema.commands.command(command_token(line)?)?;

        match command {
            Command::Summary => Some(MetadataSection::Summary),
            Command::Topology => Some(MetadataSection::Topology),
            Command::Learning => Some(MetadataSection::Learning),
            Command::NetworkConnected | Command::Receive | Command::IntrinsicPlasticity |
            Command::Learn | Command::Update | Command::Fire => None,
        }
    }

    pub fn extract<S: AsRef<str>>(&self, lines: &[S]) -> NetworkMetadata {
        let mut metadata = NetworkMetadata::default();

        for line in lines.iter() {
            let line = line.as_ref();

            let section = match self.header_section(line) {
                Some(section) => section,
                None => continue,
            };

            let parsed = match lex_line(line) {
                Some(parsed) => parsed,
                None => continue,
            };

            if section == MetadataSection::Topology && parsed.contains_key(fields::NEURON_ID) {
                continue;
            }

            metadata.insert(section, parsed.attributes);
        }

        debug!(
            sections = ?MetadataSection::ALL.iter().filter(|section| metadata.contains(**section)).collect::<Vec<_>>(),
            "extracted network metadata"
        );

        metadata
    }
}
