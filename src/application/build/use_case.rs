//! Build Use Case
//!
//! Orchestrates the build flow, per asset type (css first, then js) and per
//! section in declaration order:
//! 1. Resolve the effective configuration (defaults, parent, section)
//! 2. Check the temp directory is writable
//! 3. Resolve the concrete file list
//! 4. Describe the pipeline
//! 5. Publish the temp path in the factory registry
//!
//! The first failing section aborts the whole build.

use crate::config::ProjectConfig;
use crate::domain::ports::{BuildEvent, BuildEventSink, FileSystem, NoopEventSink};
use crate::domain::services::{
    DefaultsProvider, FactoryRegistry, FileSetResolver, PipelineBuilder, SectionResolver,
};
use crate::domain::value_objects::AssetType;
use crate::error::AssetPackResult;

use super::result::{BuildOutput, RegistryCollision, SectionReport};

/// Build use case - parameterized by the filesystem port
pub struct BuildUseCase<FS: FileSystem> {
    file_system: FS,
}

impl<FS: FileSystem> BuildUseCase<FS> {
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    /// Build every declared section
    pub fn execute(
        &self,
        config: &ProjectConfig,
        defaults: &DefaultsProvider,
    ) -> AssetPackResult<BuildOutput> {
        self.execute_with_events(config, defaults, &NoopEventSink)
    }

    /// Build every declared section, reporting progress to `events`
    pub fn execute_with_events(
        &self,
        config: &ProjectConfig,
        defaults: &DefaultsProvider,
        events: &dyn BuildEventSink,
    ) -> AssetPackResult<BuildOutput> {
        events.on_event(BuildEvent::Started {
            css_sections: config.css.len(),
            js_sections: config.js.len(),
        });

        let files = FileSetResolver::new(&self.file_system);
        let mut output = BuildOutput::default();

        for asset_type in AssetType::ALL {
            let type_default = defaults.defaults(asset_type);
            let sections = SectionResolver::new(
                asset_type,
                config.sections(asset_type),
                &type_default,
                &self.file_system,
            );

            for name in config.sections(asset_type).names() {
                let resolved = sections.resolve(name)?;
                let file_list = files.resolve(&resolved)?;

                if events.wants_detailed_events() {
                    events.on_event(BuildEvent::SectionResolved {
                        section: resolved.id.clone(),
                        parent: resolved.parent.clone(),
                        local_files: file_list.local_files().count(),
                        remote_files: file_list.remote_files().count(),
                    });
                }

                output
                    .pipelines
                    .push(PipelineBuilder::build(&resolved, &file_list));

                if let Some(previous) = output
                    .registry
                    .register(&resolved.id, resolved.config.temp_path.as_str())
                {
                    let collision = RegistryCollision {
                        key: resolved.id.registry_key(),
                        previous: previous.owner,
                        current: resolved.id.clone(),
                    };
                    events.on_event(BuildEvent::RegistryCollision {
                        key: collision.key.clone(),
                        previous: collision.previous.clone(),
                        current: collision.current.clone(),
                    });
                    output.collisions.push(collision);
                }
            }
        }

        events.on_event(BuildEvent::Completed {
            pipeline_count: output.pipelines.len(),
        });

        Ok(output)
    }

    /// Resolve a single section without touching the registry
    pub fn show(
        &self,
        config: &ProjectConfig,
        defaults: &DefaultsProvider,
        asset_type: AssetType,
        name: &str,
    ) -> AssetPackResult<SectionReport> {
        let type_default = defaults.defaults(asset_type);
        let section = SectionResolver::new(
            asset_type,
            config.sections(asset_type),
            &type_default,
            &self.file_system,
        )
        .resolve(name)?;
        let resolved_files = FileSetResolver::new(&self.file_system).resolve(&section)?;

        Ok(SectionReport {
            section,
            resolved_files,
        })
    }
}
