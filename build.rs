use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use phf_codegen::Map;
use regex::Regex;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

#[path = "src/models/grant.rs"]
mod grant;
#[path = "src/slug.rs"]
mod slug;

use grant::Grant;
use slug::slugify;

const RESOURCES_FILE_NAME: &str = "compiled.gresources";
const UI_XML: &str = include_str!("resources/ui.xml");
const MANIFEST_TOML: &str = include_str!("Cargo.toml");
const RESOURCES_XML: &str = include_str!("resources/resources.gresource.xml.in");

// ===== TRAITS =====

trait StringExtensions {
    fn replace_exactly(&self, from: &str, to: &str, count: usize) -> Result<String>;
}

impl<T> StringExtensions for T
where
    T: AsRef<str>,
{
    fn replace_exactly(&self, from: &str, to: &str, count: usize) -> Result<String> {
        let text = self.as_ref();
        let parts: Vec<&str> = text.split(from).collect();
        let actual_count = parts.len() - 1;

        if actual_count != count {
            bail!(
                "Expected to replace exactly {count} occurrence(s) of '{from}' with '{to}', but found {actual_count}."
            );
        }

        Ok(parts.join(to))
    }
}

// ===== APPLICATION METADATA =====

struct ApplicationMetadata {
    name: &'static str,
    description: &'static str,
    version: &'static str,
    website: &'static str,
    id: String,
    prefix: String,
    title: String,
    dataset: String,
    authors: Vec<String>,
}

impl ApplicationMetadata {
    fn extract_from_cargo() -> Result<Self> {
        let name = env!("CARGO_PKG_NAME");
        let description = env!("CARGO_PKG_DESCRIPTION");
        let version = env!("CARGO_PKG_VERSION");
        let website = env!("CARGO_PKG_HOMEPAGE");
        let authors = env!("CARGO_PKG_AUTHORS")
            .split(':')
            .map(ToString::to_string)
            .collect();

        let manifest: toml::Value = toml::from_str(MANIFEST_TOML)
            .context("Failed to parse Cargo.toml")?;

        let metadata = manifest.get("package")
            .context("Missing [package] section in Cargo.toml")?
            .get("metadata")
            .context("Missing [package.metadata] section in Cargo.toml")?;

        Ok(Self {
            name,
            description,
            version,
            website,
            id: Self::extract_string(metadata, "id")?,
            prefix: Self::extract_string(metadata, "prefix")?,
            title: Self::extract_string(metadata, "title")?,
            dataset: Self::extract_string(metadata, "dataset")?,
            authors,
        })
    }

    fn extract_string(value: &toml::Value, key: &str) -> Result<String> {
        value.get(key)
            .and_then(|v| v.as_str())
            .map(ToString::to_string)
            .with_context(|| format!("Key '{key}' in [package.metadata] is missing or not a string"))
    }
}

// ===== BUILD CONFIGURATION =====

struct BuildConfiguration {
    output_dir: PathBuf,
    resources_dir: PathBuf,
    dataset_file: PathBuf,
    catalog_file: PathBuf,
    resources_xml_file: PathBuf,
    compiled_resources_file: PathBuf,
}

impl BuildConfiguration {
    fn new(metadata: &ApplicationMetadata) -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let output_dir = PathBuf::from(std::env::var("OUT_DIR").context("OUT_DIR is not set")?);

        Ok(Self {
            resources_dir: root.join("resources"),
            dataset_file: root.join(&metadata.dataset),
            catalog_file: output_dir.join("catalog.rs"),
            resources_xml_file: output_dir.join("resources.xml"),
            compiled_resources_file: output_dir.join(RESOURCES_FILE_NAME),
            output_dir,
        })
    }
}

// ===== DATASET =====

struct DatasetLoader;

impl DatasetLoader {
    fn load(path: &Path) -> Result<Vec<Grant>> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset {}", path.display()))?;

        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse dataset {}", path.display()))
    }
}

// ===== SLUG INDEX =====

struct SlugCollision {
    slug: String,
    kept: String,
    shadowed: String,
}

struct SlugIndex {
    entries: Vec<(String, usize)>,
    collisions: Vec<SlugCollision>,
}

impl SlugIndex {
    fn build_from_grants(grants: &[Grant]) -> Self {
        let mut first_by_slug = HashMap::<String, usize>::new();
        let mut entries = Vec::new();
        let mut collisions = Vec::new();

        for (index, grant) in grants.iter().enumerate() {
            let slug = slugify(&grant.grant_name);
            match first_by_slug.entry(slug.clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(index);
                    entries.push((slug, index));
                }
                Entry::Occupied(entry) => collisions.push(SlugCollision {
                    slug,
                    kept: grants[*entry.get()].grant_name.clone(),
                    shadowed: grant.grant_name.clone(),
                }),
            }
        }

        Self { entries, collisions }
    }

    fn report_collisions(&self) {
        for collision in &self.collisions {
            println!(
                "cargo:warning=slug '{slug}' of '{shadowed}' is already used by '{kept}', the grant is unreachable by slug",
                slug = collision.slug,
                shadowed = collision.shadowed,
                kept = collision.kept
            );
        }
    }
}

// ===== CATALOG CODE BUILDER =====

struct CatalogCodeBuilder;

impl CatalogCodeBuilder {
    fn format_phf_map(entries: &[(String, usize)]) -> String {
        let mut phf_builder = Map::new();
        for (slug, index) in entries {
            phf_builder.entry(slug.as_str(), index.to_string());
        }

        phf_builder.build().to_string()
    }

    fn format_grant_struct(grant: &Grant) -> String {
        format!(
            "Grant {{
                grant_name: {grant_name:?},
                funding_organization: {funding_organization:?},
                website: {website:?},
                country: {country:?},
                grant_amount: {grant_amount:?},
                eligible_disciplines: &{eligible_disciplines:?},
                application_frequency: {application_frequency:?},
                key_requirements: {key_requirements:?},
                typical_deadlines: &{typical_deadlines:?}
            }}",
            grant_name = grant.grant_name,
            funding_organization = grant.funding_organization,
            website = grant.website,
            country = grant.country,
            grant_amount = grant.grant_amount,
            eligible_disciplines = grant.eligible_disciplines,
            application_frequency = grant.application_frequency,
            key_requirements = grant.key_requirements,
            typical_deadlines = grant.typical_deadlines
        )
    }

    fn build_catalog_struct_code(grants: &[Grant], slug_index: &SlugIndex) -> String {
        let grants_array = grants.iter()
            .map(Self::format_grant_struct)
            .collect::<Vec<_>>()
            .join(", ");
        let slugs_map = Self::format_phf_map(&slug_index.entries);

        format!(
            "Catalog {{
                grants: &[{grants_array}],
                slugs_map: {slugs_map}
            }}"
        )
    }
}

// ===== CATALOG PROCESSOR =====

struct CatalogProcessor<'a> {
    config: &'a BuildConfiguration,
}

impl<'a> CatalogProcessor<'a> {
    const fn new(config: &'a BuildConfiguration) -> Self {
        Self { config }
    }

    fn process_catalog_data(&self) -> Result<()> {
        let grants = DatasetLoader::load(&self.config.dataset_file)?;
        if grants.is_empty() {
            println!("cargo:warning=dataset {} holds no grants", self.config.dataset_file.display());
        }

        let slug_index = SlugIndex::build_from_grants(&grants);
        slug_index.report_collisions();

        let catalog_code = CatalogCodeBuilder::build_catalog_struct_code(&grants, &slug_index);
        std::fs::write(&self.config.catalog_file, catalog_code)
            .context("Failed to write catalog file")
    }
}

// ===== TEMPLATE EXTRACTOR =====

struct TemplateExtractor {
    template_regex: Regex,
    extracted_templates: HashMap<String, String>,
}

impl TemplateExtractor {
    fn new() -> Result<Self> {
        let template_regex = Regex::new(r#"(?s)<template\s+class="([^"]+)"[^>]*>.*?</template>"#)?;
        let extracted_templates = HashMap::new();
        Ok(Self { template_regex, extracted_templates })
    }

    fn extract_all_templates(&mut self) -> Result<&mut Self> {
        for capture in self.template_regex.captures_iter(UI_XML) {
            let class_match = capture.get(1).context("Template without class")?;
            let class_name = heck::AsSnakeCase(class_match.as_str()).to_string();
            let full_template = capture.get(0).map(|m| m.as_str().to_string()).unwrap_or_default();
            self.extracted_templates.insert(class_name, full_template);
        }

        if self.extracted_templates.is_empty() {
            bail!("resources/ui.xml holds no templates");
        }

        Ok(self)
    }

    fn save_template_files_to_directory(&self, output_path: &Path) -> Result<&Self> {
        for (class_name, template_content) in &self.extracted_templates {
            let file_path = output_path.join(format!("{class_name}.ui"));
            let formatted_template = format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<interface>{template_content}</interface>");
            std::fs::write(&file_path, formatted_template)
                .with_context(|| format!("Failed to write {}", file_path.display()))?;
        }
        Ok(self)
    }

    fn build_templates_resources_xml(&self) -> String {
        let mut class_names: Vec<&String> = self.extracted_templates.keys().collect();
        class_names.sort();

        class_names
            .into_iter()
            .map(|class_name| format!("<file compressed=\"true\" alias=\"{class_name}.ui\">{class_name}.ui</file>"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ===== RESOURCE COMPILER =====

struct ResourceCompiler<'a> {
    config: &'a BuildConfiguration,
    app_prefix: &'a str,
    source_directories: Vec<&'a Path>,
    template_replacements: HashMap<&'a str, &'a str>,
}

impl<'a> ResourceCompiler<'a> {
    fn new(config: &'a BuildConfiguration, app_prefix: &'a str) -> Self {
        Self {
            config,
            app_prefix,
            source_directories: Vec::new(),
            template_replacements: HashMap::new(),
        }
    }

    fn add_template_replacement(mut self, placeholder: &'a str, value: &'a str) -> Self {
        self.template_replacements.insert(placeholder, value);
        self
    }

    fn add_source_directory(mut self, directory: &'a Path) -> Self {
        self.source_directories.push(directory);
        self
    }

    fn compile_resources(self) -> Result<()> {
        let final_xml = self.build_final_resources_xml()?;
        std::fs::write(&self.config.resources_xml_file, &final_xml)?;

        glib_build_tools::compile_resources(
            &self.source_directories,
            self.config.resources_xml_file.to_str().context("Invalid XML path")?,
            self.config.compiled_resources_file.to_str().context("Invalid compiled file path")?,
        );

        Ok(())
    }

    fn build_final_resources_xml(&self) -> Result<String> {
        let mut final_xml = String::from(RESOURCES_XML);
        for (placeholder, value) in &self.template_replacements {
            final_xml = final_xml.replace_exactly(&format!("@{placeholder}@"), value, 1)?;
        }
        final_xml.replace_exactly("@APP_PREFIX@", self.app_prefix, 1)
    }
}

// ===== CARGO ENVIRONMENT =====

struct CargoEnvironmentVariables;

impl CargoEnvironmentVariables {
    fn emit_build_configuration_flags() {
        println!("cargo:rustc-cfg=runtime");
    }

    fn emit_application_metadata(metadata: &ApplicationMetadata, resources_path: &Path) {
        println!("cargo:rustc-env=APP_NAME={}", metadata.name);
        println!("cargo:rustc-env=APP_DESCRIPTION={}", metadata.description);
        println!("cargo:rustc-env=APP_VERSION={}", metadata.version);
        println!("cargo:rustc-env=APP_WEBSITE={}", metadata.website);
        println!("cargo:rustc-env=APP_ID={}", metadata.id);
        println!("cargo:rustc-env=APP_PREFIX={}", metadata.prefix);
        println!("cargo:rustc-env=APP_TITLE={}", metadata.title);
        println!("cargo:rustc-env=APP_AUTHORS={}", metadata.authors.join(","));
        println!("cargo:rustc-env=APP_RESOURCES={}", resources_path.display());
    }

    fn emit_all_environment_variables(metadata: &ApplicationMetadata, resources_path: &Path) {
        Self::emit_build_configuration_flags();
        Self::emit_application_metadata(metadata, resources_path);
    }
}

// ===== BUILD ENVIRONMENT =====

struct BuildEnvironment;

impl BuildEnvironment {
    fn setup_cargo_configuration(config: &BuildConfiguration) {
        println!("cargo:rustc-check-cfg=cfg(runtime)");
        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed=Cargo.toml");
        println!("cargo:rerun-if-changed=resources");
        println!("cargo:rerun-if-changed=src/models/grant.rs");
        println!("cargo:rerun-if-changed=src/slug.rs");
        println!("cargo:rerun-if-changed={}", config.dataset_file.display());
    }
}

// ===== BUILD PIPELINE =====

struct BuildPipeline {
    config: BuildConfiguration,
    app_metadata: ApplicationMetadata,
}

impl BuildPipeline {
    fn new() -> Result<Self> {
        let app_metadata = ApplicationMetadata::extract_from_cargo()?;
        let config = BuildConfiguration::new(&app_metadata)?;
        Ok(Self { config, app_metadata })
    }

    fn execute_complete_build(&self) -> Result<()> {
        BuildEnvironment::setup_cargo_configuration(&self.config);

        CatalogProcessor::new(&self.config).process_catalog_data()?;
        let templates_xml = self.process_template_resources()?;
        self.compile_final_resources(&templates_xml)?;
        CargoEnvironmentVariables::emit_all_environment_variables(
            &self.app_metadata,
            &self.config.compiled_resources_file
        );

        Ok(())
    }

    fn process_template_resources(&self) -> Result<String> {
        let mut extractor = TemplateExtractor::new()?;
        let xml_content = extractor
            .extract_all_templates()?
            .save_template_files_to_directory(&self.config.output_dir)?
            .build_templates_resources_xml();

        Ok(xml_content)
    }

    fn compile_final_resources(&self, templates_xml: &str) -> Result<()> {
        ResourceCompiler::new(&self.config, &self.app_metadata.prefix)
            .add_template_replacement("APP_TEMPLATES", templates_xml)
            .add_source_directory(&self.config.output_dir)
            .add_source_directory(&self.config.resources_dir)
            .compile_resources()
    }
}

// ===== MAIN =====

fn main() -> Result<()> {
    BuildPipeline::new()?.execute_complete_build()
}
