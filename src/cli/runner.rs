use crate::{
    cli::{processor::FileProcessor, Args},
    error::Result,
    ioutils::{normalize_output_dir, split_variables_paths},
    loader::ResourceNamespace,
    renderer::MiniJinjaRenderer,
    template::{get_template_engine, load_template, TemplateProcessor, TemplateSource, WriteOp},
    variables::{AggregationMode, NamedResult, VariablesReader},
};
use std::path::Path;

/// Main CLI runner that orchestrates reading variables and rendering the template
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete generation workflow
    pub fn run(self) -> Result<()> {
        let resources = ResourceNamespace::with_defaults(&self.args.resources);
        log::debug!("Resource roots: {:?}", resources.roots());

        let (template, engine) = self.prepare_template(&resources)?;

        let variables_paths = split_variables_paths(&self.args.variables);
        let output_root = normalize_output_dir(&self.args.output);
        let mode = AggregationMode::from_combine_flag(self.args.combine);
        log::info!(
            "Running rendering with template '{}', variables paths {:?}, output path '{}', mode {}",
            self.args.template,
            variables_paths,
            output_root.display(),
            mode
        );

        let results = self.read_variables(&resources, &variables_paths, mode)?;

        let operations = self.render(&engine, &template, &output_root, &results)?;

        FileProcessor::new(self.args.dry_run).write_all(&operations)?;

        let prefix = if self.args.dry_run { "[DRY RUN] " } else { "" };
        println!(
            "{}Rendered {} variables set(s) into {} file(s) under {}.",
            prefix,
            results.len(),
            operations.len(),
            output_root.display()
        );
        Ok(())
    }

    /// Loads the template and builds the engine; syntax errors stop the run before any data is read
    fn prepare_template(
        &self,
        resources: &ResourceNamespace,
    ) -> Result<(TemplateSource, MiniJinjaRenderer)> {
        let template = load_template(&self.args.template, resources)?;
        let engine = get_template_engine(&template, resources)?;
        Ok((template, engine))
    }

    /// Reads and aggregates all variables paths
    fn read_variables(
        &self,
        resources: &ResourceNamespace,
        variables_paths: &[String],
        mode: AggregationMode,
    ) -> Result<Vec<NamedResult>> {
        VariablesReader::new(resources).combine(variables_paths, mode)
    }

    /// Renders every variables set; nothing is written until all renders succeed
    fn render(
        &self,
        engine: &MiniJinjaRenderer,
        template: &TemplateSource,
        output_root: &Path,
        results: &[NamedResult],
    ) -> Result<Vec<WriteOp>> {
        TemplateProcessor::new(engine, &template.name, output_root).process_all(results)
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}

