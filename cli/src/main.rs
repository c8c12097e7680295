//! resumekit CLI - resume normalization and rendering tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use resumekit::export::download_file_name;
use resumekit::render::{
    self, HtmlRenderer, PrintRenderer, ScreenRenderer, SectionKind, SkipSectionsVisitor,
};
use resumekit::{
    list_templates, CanonicalResume, DocxExportRequest, ExportFormat, HtmlOptions, JsonFormat,
    NormalizeOptions, PageSize, PdfExportRequest, PreviewInput, RawResume, RenderOptions,
    RenderStats, RenderedDocument, TemplateStyle,
};

#[derive(Parser)]
#[command(name = "resumekit")]
#[command(version)]
#[command(about = "Normalize resume JSON and render it to HTML, text, and JSON", long_about = None)]
struct Cli {
    /// Input resume JSON file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Template id
    #[arg(short, long, env = "RESUMEKIT_TEMPLATE", default_value = "professional")]
    template: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a resume to every format (HTML, text, JSON, export payloads)
    Convert {
        /// Input resume JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Template id
        #[arg(short, long, env = "RESUMEKIT_TEMPLATE", default_value = "professional")]
        template: String,
    },

    /// Print the canonical form of a resume
    Normalize {
        /// Input resume JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Normalize strings to Unicode NFC
        #[arg(long)]
        nfc: bool,
    },

    /// Render the screen preview
    Preview {
        /// Input JSON file (object, markdown string, or null)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Template id
        #[arg(short, long, env = "RESUMEKIT_TEMPLATE", default_value = "professional")]
        template: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: PreviewFormat,

        /// Emit a standalone HTML document
        #[arg(long)]
        standalone: bool,

        /// Sections to leave out of the HTML (e.g. "tools,languages")
        #[arg(long, value_enum, value_delimiter = ',')]
        skip: Vec<SectionArg>,
    },

    /// Render the print document or an export service payload
    Export {
        /// Input resume JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Template id
        #[arg(short, long, env = "RESUMEKIT_TEMPLATE", default_value = "professional")]
        template: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: ExportTarget,

        /// Page size
        #[arg(long, value_enum, default_value = "a4")]
        page: PageArg,

        /// Custom style descriptor (JSON file with the five colors)
        #[arg(long, value_name = "FILE")]
        style: Option<PathBuf>,
    },

    /// Render every .json file in a directory
    Batch {
        /// Directory of resume JSON files
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Template id
        #[arg(short, long, env = "RESUMEKIT_TEMPLATE", default_value = "professional")]
        template: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: ExportTarget,
    },

    /// List the built-in templates
    Templates,

    /// Show resume information
    Info {
        /// Input resume JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PreviewFormat {
    /// HTML fragment or document
    Html,
    /// Plain text
    Text,
    /// Rendered document tree as JSON
    Json,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ExportTarget {
    /// Standalone print HTML
    Html,
    /// Plain text
    Text,
    /// Rendered document tree as JSON
    Json,
    /// PDF service request body
    Payload,
    /// DOCX service request body
    DocxPayload,
}

impl ExportTarget {
    fn extension(self) -> &'static str {
        match self {
            ExportTarget::Html => "html",
            ExportTarget::Text => "txt",
            ExportTarget::Json | ExportTarget::Payload | ExportTarget::DocxPayload => "json",
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PageArg {
    A4,
    Letter,
}

impl From<PageArg> for PageSize {
    fn from(page: PageArg) -> Self {
        match page {
            PageArg::A4 => PageSize::A4,
            PageArg::Letter => PageSize::Letter,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum SectionArg {
    Header,
    Education,
    Summary,
    Skills,
    Experience,
    Projects,
    Certifications,
    Languages,
    Tools,
}

impl From<SectionArg> for SectionKind {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Header => SectionKind::Header,
            SectionArg::Education => SectionKind::Education,
            SectionArg::Summary => SectionKind::Summary,
            SectionArg::Skills => SectionKind::Skills,
            SectionArg::Experience => SectionKind::Experience,
            SectionArg::Projects => SectionKind::Projects,
            SectionArg::Certifications => SectionKind::Certifications,
            SectionArg::Languages => SectionKind::Languages,
            SectionArg::Tools => SectionKind::Tools,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            template,
        }) => cmd_convert(&input, output.as_deref(), &template),
        Some(Commands::Normalize {
            input,
            output,
            compact,
            nfc,
        }) => cmd_normalize(&input, output.as_deref(), compact, nfc),
        Some(Commands::Preview {
            input,
            output,
            template,
            format,
            standalone,
            skip,
        }) => cmd_preview(&input, output.as_deref(), &template, format, standalone, &skip),
        Some(Commands::Export {
            input,
            output,
            template,
            format,
            page,
            style,
        }) => cmd_export(
            &input,
            output.as_deref(),
            &template,
            format,
            page,
            style.as_deref(),
        ),
        Some(Commands::Batch {
            input,
            output,
            template,
            format,
        }) => cmd_batch(&input, output.as_deref(), &template, format),
        Some(Commands::Templates) => {
            cmd_templates();
            Ok(())
        }
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), &cli.template)
            } else {
                println!("{}", "Usage: resumekit <FILE> [OUTPUT]".yellow());
                println!("       resumekit --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn load_resume(input: &Path) -> CliResult<CanonicalResume> {
    Ok(resumekit::normalize_file(input)?)
}

fn write_or_print(output: Option<&Path>, content: &str) -> CliResult<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn print_options(template: &str, page: PageSize, style: Option<TemplateStyle>) -> RenderOptions {
    let options = RenderOptions::new()
        .with_template_id(template)
        .with_page_size(page);
    match style {
        Some(style) => options.with_style(style),
        None => options,
    }
}

fn render_target(
    resume: &CanonicalResume,
    options: RenderOptions,
    target: ExportTarget,
) -> CliResult<String> {
    let doc = PrintRenderer::new(options).render(resume)?;
    let html_options = HtmlOptions::new().with_standalone(true);

    let content = match target {
        ExportTarget::Html => render::to_html(&doc, &html_options),
        ExportTarget::Text => render::to_text(&doc),
        ExportTarget::Json => render::to_json(&doc, JsonFormat::Pretty)?,
        ExportTarget::Payload => {
            PdfExportRequest::from_document(&doc, resume, &html_options)?.to_json()?
        }
        ExportTarget::DocxPayload => DocxExportRequest::new(resume.clone())
            .with_document(&doc)
            .to_json()?,
    };
    Ok(content)
}

fn cmd_convert(input: &Path, output: Option<&Path>, template: &str) -> CliResult<()> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Normalizing resume...");
    let resume = load_resume(input)?;
    fs::write(
        output_dir.join("resume.json"),
        serde_json::to_string_pretty(&resume)?,
    )?;
    pb.inc(1);

    let options = print_options(template, PageSize::A4, None);

    pb.set_message("Rendering HTML...");
    let html = render_target(&resume, options.clone(), ExportTarget::Html)?;
    fs::write(output_dir.join("resume.html"), &html)?;
    pb.inc(1);

    pb.set_message("Rendering text...");
    let text = render_target(&resume, options.clone(), ExportTarget::Text)?;
    fs::write(output_dir.join("resume.txt"), &text)?;
    pb.inc(1);

    pb.set_message("Building export payloads...");
    let document = render_target(&resume, options.clone(), ExportTarget::Json)?;
    fs::write(output_dir.join("document.json"), &document)?;
    let payload = render_target(&resume, options, ExportTarget::Payload)?;
    fs::write(output_dir.join("pdf-request.json"), &payload)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    println!("  {} resume.json", "├─".dimmed());
    println!("  {} resume.html", "├─".dimmed());
    println!("  {} resume.txt", "├─".dimmed());
    println!("  {} document.json", "├─".dimmed());
    println!("  {} pdf-request.json", "└─".dimmed());

    Ok(())
}

fn cmd_normalize(input: &Path, output: Option<&Path>, compact: bool, nfc: bool) -> CliResult<()> {
    let json = fs::read_to_string(input)?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    if !value.is_object() {
        log::warn!("{} does not hold a JSON object", input.display());
    }

    let options = NormalizeOptions::new().with_unicode_nfc(nfc);
    let resume = resumekit::normalize::normalize_with_options(&RawResume::from_value(&value), &options);

    let content = if compact {
        serde_json::to_string(&resume)?
    } else {
        serde_json::to_string_pretty(&resume)?
    };
    write_or_print(output, &content)
}

fn cmd_preview(
    input: &Path,
    output: Option<&Path>,
    template: &str,
    format: PreviewFormat,
    standalone: bool,
    skip: &[SectionArg],
) -> CliResult<()> {
    let preview = resumekit::load_file(input)?;
    if let PreviewInput::Unsupported(shape) = &preview {
        eprintln!(
            "{} input is a {}, showing the error state",
            "Warning:".yellow().bold(),
            shape
        );
    }

    let options = RenderOptions::new().with_template_id(template);
    let doc = ScreenRenderer::new(options).render(&preview)?;

    let content = match format {
        PreviewFormat::Html => {
            let html_options = HtmlOptions::new().with_standalone(standalone);
            let mut renderer = HtmlRenderer::new(html_options);
            if !skip.is_empty() {
                let kinds = skip.iter().map(|&s| SectionKind::from(s));
                renderer = renderer.with_visitor(SkipSectionsVisitor::new(kinds));
            }
            renderer.render(&doc)
        }
        PreviewFormat::Text => render::to_text(&doc),
        PreviewFormat::Json => render::to_json(&doc, JsonFormat::Pretty)?,
    };
    write_or_print(output, &content)
}

fn cmd_export(
    input: &Path,
    output: Option<&Path>,
    template: &str,
    format: ExportTarget,
    page: PageArg,
    style: Option<&Path>,
) -> CliResult<()> {
    let resume = load_resume(input)?;
    let style = match style {
        Some(path) => Some(TemplateStyle::from_json(&fs::read_to_string(path)?)?),
        None => None,
    };

    let options = print_options(template, page.into(), style);
    let content = render_target(&resume, options, format)?;
    write_or_print(output, &content)
}

fn cmd_batch(
    input: &Path,
    output: Option<&Path>,
    template: &str,
    format: ExportTarget,
) -> CliResult<()> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| input.join("rendered"));
    fs::create_dir_all(&output_dir)?;

    let mut files: Vec<PathBuf> = fs::read_dir(input)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let options = print_options(template, PageSize::A4, None);
    let mut failures = Vec::new();

    for path in &files {
        let name = path.file_name().unwrap_or_default().to_string_lossy().to_string();
        pb.set_message(name.clone());

        let rendered = load_resume(path).and_then(|resume| {
            let content = render_target(&resume, options.clone(), format)?;
            let stem = path.file_stem().unwrap_or_default().to_string_lossy();
            let target = output_dir.join(format!("{}.{}", stem, format.extension()));
            fs::write(target, content)?;
            Ok(())
        });

        if let Err(e) = rendered {
            log::warn!("Failed to render {}: {}", path.display(), e);
            failures.push((name, e.to_string()));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} of {} resumes rendered to {}",
        "Done!".green().bold(),
        files.len() - failures.len(),
        files.len(),
        output_dir.display()
    );
    for (name, error) in &failures {
        println!("  {} {}: {}", "✗".red(), name, error);
    }

    Ok(())
}

fn cmd_templates() {
    println!("{}", "Templates".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for template in list_templates() {
        println!(
            "{:<14} {}",
            template.id.as_str().bold(),
            template.description
        );
        println!(
            "{:<14} {} {} / header: {:?}",
            "",
            "primary".dimmed(),
            template.style.primary_color,
            template.style.header_style
        );
    }
}

fn print_stats(doc: &RenderedDocument) {
    let stats = RenderStats::from_document(doc);
    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!("{}: {}", "Items".bold(), stats.item_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);
}

fn cmd_info(input: &Path) -> CliResult<()> {
    let preview = resumekit::load_file(input)?;

    println!("{}", "Resume Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Shape".bold(), preview.shape());

    let resume = match &preview {
        PreviewInput::Structured(resume) => resume,
        _ => return Ok(()),
    };

    println!("{}: {}", "Name".bold(), resume.name);
    if !resume.contact_info.is_empty() {
        println!("{}: {}", "Contact".bold(), resume.contact_info);
    }
    println!("{}: {}", "Roles".bold(), resume.experience.len());
    println!("{}: {}", "Bullets".bold(), resume.bullet_count());
    println!("{}: {}", "Skills".bold(), resume.skills.len());
    println!(
        "{}: {}",
        "One page".bold(),
        if resumekit::estimate_fits_one_page(resume) {
            "Yes"
        } else {
            "No"
        }
    );
    println!(
        "{}: {}",
        "Download".bold(),
        download_file_name(&resume.name, ExportFormat::Pdf)
    );

    println!();
    println!("{}", "Print Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let doc = PrintRenderer::default().render(resume)?;
    print_stats(&doc);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "resumekit".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Resume normalization and rendering tool");
    println!();
    println!("License: MIT");
}
