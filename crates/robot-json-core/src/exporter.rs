//! Joint graph extraction and descriptor export
//!
//! [`JointGraphExporter`] walks a design's joints once, keyed by the
//! sanitized name of each joint's second occurrence, and writes the result
//! as a JSON robot descriptor to a path chosen through [`UserPrompt`].
//!
//! A record is derived once, when its key is first seen. Later joints with
//! the same key only append to `linked_to`; their origin and motion are
//! dropped. The id counter still advances for them.

use std::path::PathBuf;

use crate::descriptor::{Constraint, Header, JointRecord, JointTable, RobotDescriptor};
use crate::design::{Component, Design, DesignHost, Joint};
use crate::error::{ExportError, ExportResult, error_report};
use crate::logger::Logger;
use crate::prompt::{SaveRequest, UserPrompt};
use crate::settings::ExportSettings;
use crate::types::{JointMotion, Origin};

/// Record key used when a joint has no second occurrence
pub const NULL_OCCURRENCE: &str = "null";
/// `linked_to` entry used when a joint has no first occurrence
pub const MISSING_LINK: &str = "None";

pub const SAVE_DIALOG_TITLE: &str = "Save Robot JSON";
pub const JSON_FILTER_NAME: &str = "JSON files (*.json)";
pub const APP_TITLE: &str = "Simple Robot JSON";
pub const SUCCESS_MESSAGE: &str = "Robot descriptor successfully generated";
pub const ERROR_TITLE: &str = "Error";

/// Result of a completed export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Descriptor written to this path
    Written(PathBuf),
    /// The save prompt was declined; nothing was written
    Cancelled,
}

/// Remove every `:` from an occurrence name
pub fn sanitize_occurrence_name(name: &str) -> String {
    name.replace(':', "")
}

/// Builds robot descriptors from a design and saves them
pub struct JointGraphExporter<L, P> {
    settings: ExportSettings,
    logger: L,
    prompt: P,
}

impl<L: Logger, P: UserPrompt> JointGraphExporter<L, P> {
    pub fn new(settings: ExportSettings, logger: L, prompt: P) -> Self {
        Self {
            settings,
            logger,
            prompt,
        }
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// Run the whole export and report any failure through the prompt
    pub fn run(&mut self, host: &dyn DesignHost) -> ExportResult<ExportOutcome> {
        let result = self
            .build_descriptor(host)
            .and_then(|descriptor| self.export(&descriptor));

        if let Err(err) = &result {
            if err.is_user_facing() {
                self.prompt.show_error(ERROR_TITLE, &err.to_string());
            } else {
                let report = format!("Failed:\n{}", error_report(err));
                self.prompt.show_error(APP_TITLE, &report);
            }
        }

        result
    }

    /// Header, base link lookup and joint traversal
    pub fn build_descriptor(&self, host: &dyn DesignHost) -> ExportResult<RobotDescriptor> {
        let header = self.build_header(host)?;

        let design = host.active_design().ok_or(ExportError::NoActiveDesign)?;
        let base_link = self.extract_base_link(design)?;
        self.logger.info(&format!("Base link id: {}", base_link.id));

        let joints = self.build_joint_graph(design, &base_link);
        Ok(RobotDescriptor::new(header, joints))
    }

    /// Descriptor name, version, author and description
    pub fn build_header(&self, host: &dyn DesignHost) -> ExportResult<Header> {
        let document = host.active_document().ok_or(ExportError::NoActiveDesign)?;
        let author = host
            .attribute(&self.settings.author_group, &self.settings.author_attribute)
            .unwrap_or_else(|| self.settings.default_author.clone());

        Ok(Header {
            name: document.name,
            version: document.version,
            author,
            description: self.settings.description.clone(),
        })
    }

    /// First component whose name matches the root name exactly
    pub fn extract_base_link(&self, design: &dyn Design) -> ExportResult<Component> {
        let root_name = &self.settings.root_component;
        let component = design
            .all_components()
            .into_iter()
            .find(|c| &c.name == root_name)
            .ok_or_else(|| ExportError::MissingRootComponent {
                name: root_name.clone(),
            })?;

        self.logger.info(&format!(
            "Component found: {} with id {}",
            component.name, component.id
        ));
        Ok(component)
    }

    /// Walk every joint in host order and accumulate joint records
    pub fn build_joint_graph(&self, design: &dyn Design, base_link: &Component) -> JointTable {
        let joints = design.all_joints();
        self.logger
            .info(&format!("Total joints found: {}", joints.len()));

        let mut table = JointTable::new();
        for (id, joint) in joints.iter().enumerate() {
            self.process_joint(&mut table, id, joint, base_link);
            self.logger.info(&format!("Processed joint: {}", joint.name));
        }
        table
    }

    fn process_joint(
        &self,
        table: &mut JointTable,
        id: usize,
        joint: &Joint,
        base_link: &Component,
    ) {
        if joint.occurrence_one.is_none() {
            self.logger
                .info(&format!("Joint {} has no occurrenceOne!", joint.name));
        }

        let to_part = occurrence_key(
            joint.occurrence_one.as_ref().map(|o| o.name.as_str()),
            MISSING_LINK,
        );
        let from_part = occurrence_key(
            joint.occurrence_two.as_ref().map(|o| o.name.as_str()),
            NULL_OCCURRENCE,
        );

        if joint.occurrence_two.is_none() {
            self.logger.info(&format!(
                "Joint {} is not connected to any component. (End Joint?)",
                joint.name
            ));
        } else {
            self.logger.info(&format!(
                "Joint {} connects {} to {}",
                joint.name, from_part, to_part
            ));
        }

        if let Some(record) = table.get_mut(&from_part) {
            record.linked_to.push(to_part);
            return;
        }

        let is_root = joint
            .occurrence_two
            .as_ref()
            .is_some_and(|o| o.component == base_link.id);

        let mut record = JointRecord {
            id,
            is_root,
            origin: Origin::from(joint.origin),
            linked_to: vec![to_part],
            rotation: None,
            constraint: None,
        };

        match joint.motion {
            JointMotion::Revolute { axis, limits } => {
                let (min, max) = limits.to_degrees();
                record.rotation = Some(axis.rotation_tuple());
                record.constraint = Some(Constraint { min, max });
            }
            JointMotion::Other(kind) => {
                let warning = ExportError::UnsupportedJointType {
                    joint: joint.name.clone(),
                    kind,
                };
                self.logger.warn(&format!("WARNING: {}", warning));
            }
        }

        table.insert(from_part, record);
    }

    /// Serialize, ask for a path and write the descriptor
    pub fn export(&mut self, descriptor: &RobotDescriptor) -> ExportResult<ExportOutcome> {
        let text = descriptor.to_json(self.settings.indent)?;

        let request = SaveRequest {
            title: SAVE_DIALOG_TITLE.to_string(),
            filter_name: JSON_FILTER_NAME.to_string(),
            extensions: vec!["json".to_string()],
            file_name: format!("{}.json", descriptor.name),
        };

        let Some(path) = self.prompt.ask_save_path(&request) else {
            tracing::debug!("Save cancelled, nothing written");
            return Ok(ExportOutcome::Cancelled);
        };

        std::fs::write(&path, &text).map_err(|e| ExportError::Io(e.to_string()))?;
        self.logger
            .info(&format!("Saved robot descriptor to {}", path.display()));
        self.prompt.show_message(APP_TITLE, SUCCESS_MESSAGE);
        Ok(ExportOutcome::Written(path))
    }
}

/// Sanitized occurrence name, or `missing` when there is no occurrence
fn occurrence_key(name: Option<&str>, missing: &str) -> String {
    name.map(sanitize_occurrence_name)
        .unwrap_or_else(|| missing.to_string())
}
