use crate::error::{Error, Result};
use std::{fs, path::Path};

const LICENSE: &str = "license.h";
const PROLOGUE: &str = "prologue.h";
const LOADER: &str = "loader.c";
const EPILOGUE: &str = "epilogue.h";

/// One OpenGL entry point as it appears in the generated header.
#[derive(Debug, Clone, Copy)]
pub struct EntryPoint<'a> {
    name: &'a str,
}

impl<'a> EntryPoint<'a> {
    pub fn new(name: &'a str) -> Self {
        Self { name }
    }

    /// Name the loader looks up, eg. `glClear`.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Pointer variable, eg. `gl3wClear`.
    pub fn short_name(&self) -> String {
        format!("gl3w{}", self.name.get(2..).unwrap_or_default())
    }

    /// Function pointer type from glcorearb.h, eg. `PFNGLCLEARPROC`.
    pub fn type_name(&self) -> String {
        format!("PFN{}PROC", self.name.to_uppercase())
    }
}

fn template(name: &'static str) -> Result<&'static str> {
    crate::RESOURCES_DIR
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .ok_or(Error::MissingResource(name))
}

/// Renders the complete header for `names`, in the order given.
pub fn render(names: &[String]) -> Result<String> {
    let entry_points: Vec<EntryPoint> = names.iter().map(|name| EntryPoint::new(name)).collect();
    let mut header = String::new();

    header.push_str(template(LICENSE)?);
    header.push_str(template(PROLOGUE)?);

    for ep in &entry_points {
        header.push_str(&format!(
            "extern {:<52} {};\n",
            ep.type_name(),
            ep.short_name()
        ));
    }
    header.push('\n');

    for ep in &entry_points {
        header.push_str(&format!("#define {:<45} {}\n", ep.name(), ep.short_name()));
    }
    header.push('\n');

    header.push_str(template(LOADER)?);

    for ep in &entry_points {
        header.push_str(&format!("{:<52} {};\n", ep.type_name(), ep.short_name()));
    }
    header.push('\n');

    header.push_str("static void load_procs(void)\n{\n");
    for ep in &entry_points {
        header.push_str(&format!(
            "\t{} = ({}) get_proc(\"{}\");\n",
            ep.short_name(),
            ep.type_name(),
            ep.name()
        ));
    }
    header.push_str("}\n");

    header.push_str(template(EPILOGUE)?);

    Ok(header)
}

/// Overwrites `path` with the header for `names`.
pub fn emit_file(path: &Path, names: &[String]) -> Result<()> {
    let header = render(names)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(Error::io(parent))?;
    }
    fs::write(path, header).map_err(Error::io(path))?;

    log::info!("Wrote {}", path.display());
    Ok(())
}
