use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::{fs, path::Path};

lazy_static! {
    // eg. "GLAPI void APIENTRY glCullFace (GLenum mode);", only at the start of a line
    static ref ENTRY_POINT: Regex = Regex::new(r"^GLAPI.*APIENTRY\s+([A-Za-z0-9_]+)").unwrap();
}

/// Collects every entry point declared in `text`, sorted.
pub fn extract(text: &str) -> Vec<String> {
    let mut names: Vec<String> = text
        .lines()
        .filter_map(|line| ENTRY_POINT.captures(line))
        .map(|captures| captures[1].to_owned())
        .collect();
    names.sort();
    names
}

pub fn extract_file(path: &Path) -> Result<Vec<String>> {
    log::info!("Parsing {}", path.display());
    let text = fs::read_to_string(path).map_err(Error::io(path))?;
    Ok(extract(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
#ifndef GL_VERSION_1_0
#define GL_VERSION_1_0 1
typedef void (APIENTRYP PFNGLCULLFACEPROC) (GLenum mode);
#ifdef GL_GLEXT_PROTOTYPES
GLAPI void APIENTRY glViewport (GLint x, GLint y, GLsizei width, GLsizei height);
GLAPI void APIENTRY glCullFace (GLenum mode);
GLAPI const GLubyte *APIENTRY glGetString (GLenum name);
#endif
GLAPI GLboolean APIENTRY	glIsEnabled (GLenum cap);
"#;

    #[test]
    fn matches_are_sorted() {
        assert_eq!(
            extract(SAMPLE),
            ["glCullFace", "glGetString", "glIsEnabled", "glViewport"]
        );
    }

    #[test]
    fn typedefs_and_defines_are_skipped() {
        let names = extract("typedef void (APIENTRYP PFNGLFLUSHPROC) (void);\n#define GLAPI extern\n");
        assert!(names.is_empty());
    }

    #[test]
    fn apientry_needs_glapi_first() {
        assert!(extract("void APIENTRY glFinish (void);").is_empty());
        assert!(extract("APIENTRY GLAPI glFinish (void);").is_empty());
    }

    #[test]
    fn sort_is_bytewise_and_keeps_duplicates() {
        let text = "GLAPI void APIENTRY glb (void);\n\
                    GLAPI void APIENTRY glB (void);\n\
                    GLAPI void APIENTRY glA (void);\n\
                    GLAPI void APIENTRY glA (void);\n";
        assert_eq!(extract(text), ["glA", "glA", "glB", "glb"]);
    }

    #[test]
    fn declaration_must_start_the_line() {
        let text = "  GLAPI void APIENTRY glIndented (void);\n\
                    /* GLAPI void APIENTRY glCommented (void); */\n\
                    \tGLAPI void APIENTRY glTabbed (void);\n\
                    GLAPI void APIENTRY glFinish (void);\n";
        assert_eq!(extract(text), ["glFinish"]);
    }

    #[test]
    fn empty_input() {
        assert!(extract("").is_empty());
    }
}
