use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use vks_log::info;

use crate::{
    error::ShaderError,
    serialize::{serialize, ByteArrayDeclaration},
};

/// Layout and naming of generated headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderStyle {
    /// Text of the leading comment line, without the `//`.
    pub banner: String,
    /// Namespace enclosing every declaration.
    pub namespace: String,
    /// Appended to the name of a shader to form its symbol.
    pub symbol_suffix: String,
    /// Prepended to the name of a shader to form its header file name.
    pub file_prefix: String,
    /// Drop the stage marker from single shader symbols, so `triangle_vert` is declared as
    /// `triangleScript`.
    pub strip_stage_marker: bool,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            banner: String::from(
                "ATTENTION: This file is generated from HLSL shaders by vks-tools. Don't edit it manually!",
            ),
            namespace: String::from("SharedLib"),
            symbol_suffix: String::from("Script"),
            file_prefix: String::from("g_"),
            strip_stage_marker: false,
        }
    }
}

impl HeaderStyle {
    #[inline]
    pub fn symbol_name(&self, root: &str) -> String {
        format!("{root}{}", self.symbol_suffix)
    }

    /// Like [`HeaderStyle::symbol_name`], but rejects symbols that are not valid C++
    /// identifiers. `origin` is the file the root was taken from.
    pub fn checked_symbol(&self, root: &str, origin: &Path) -> Result<String, ShaderError> {
        let symbol = self.symbol_name(root);
        if is_identifier(&symbol) {
            Ok(symbol)
        } else {
            Err(ShaderError::InvalidSymbol {
                symbol,
                origin: origin.into(),
            })
        }
    }

    #[inline]
    pub fn header_file_name(&self, name: &str) -> String {
        format!("{}{name}.h", self.file_prefix)
    }
}

/// `true` when `symbol` is a valid C++ identifier: an ASCII letter or `_` followed by ASCII
/// letters, digits or `_`.
pub fn is_identifier(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// A generated header: banner, `#pragma once` and one namespace holding every declaration in
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderDocument {
    banner: String,
    namespace: String,
    declarations: Vec<ByteArrayDeclaration>,
}

impl HeaderDocument {
    pub fn new(style: &HeaderStyle) -> Self {
        Self {
            banner: style.banner.clone(),
            namespace: style.namespace.clone(),
            declarations: Vec::default(),
        }
    }

    #[inline]
    pub fn push(&mut self, declaration: ByteArrayDeclaration) {
        self.declarations.push(declaration);
    }

    #[inline]
    pub fn declarations(&self) -> &[ByteArrayDeclaration] {
        &self.declarations
    }

    pub fn render(&self) -> String {
        let mut out = format!(
            "// {}\n#pragma once\n\nnamespace {}\n{{\n",
            self.banner, self.namespace
        );
        for decl in &self.declarations {
            out.push_str(decl.as_str());
            out.push('\n');
        }
        out.push_str("}\n");
        out
    }

    /// Writes the document to `path`, replacing whatever was there.
    pub fn write(&self, path: &Path) -> Result<(), ShaderError> {
        let write_err = |source: std::io::Error| ShaderError::DestinationWriteFailed {
            path: path.into(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, self.render()).map_err(write_err)?;

        info!("wrote `{}`", path.display());

        Ok(())
    }
}

/// Serializes every `(symbol, bytes)` pair, in order, into one document.
pub fn aggregate<'a>(
    style: &HeaderStyle,
    entries: impl IntoIterator<Item = (&'a str, &'a [u8])>,
) -> HeaderDocument {
    let mut doc = HeaderDocument::new(style);
    for (symbol, bytes) in entries {
        doc.push(serialize(bytes, symbol));
    }
    doc
}

/// A compiled artifact found by [`scan_artifacts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactFile {
    pub path: PathBuf,
    /// File name without its extension. Used as the symbol root.
    pub stem: String,
}

/// Lists the files directly inside `dirs` with the given extension, sorted by file name so the
/// result does not depend on the order the OS reports entries in. Stems are returned as is;
/// [`HeaderStyle::checked_symbol`] rejects the ones that cannot become symbols.
pub fn scan_artifacts(
    dirs: &[impl AsRef<Path>],
    extension: &str,
) -> Result<Vec<ArtifactFile>, ShaderError> {
    let mut found = Vec::<(OsString, ArtifactFile)>::default();

    for dir in dirs {
        let dir = dir.as_ref();
        let read_err = |source: std::io::Error| ShaderError::ArtifactRead {
            path: dir.into(),
            source,
        };

        for entry in dir.read_dir().map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let path = entry.path();

            if !path.is_file() || path.extension().map_or(true, |ext| ext != extension) {
                continue;
            }

            let stem = match path.file_stem() {
                Some(stem) => stem.to_string_lossy().into_owned(),
                None => continue,
            };

            found.push((entry.file_name(), ArtifactFile { path, stem }));
        }
    }

    found.sort_by(|(a_name, a), (b_name, b)| {
        a_name.cmp(b_name).then_with(|| a.path.cmp(&b.path))
    });

    Ok(found.into_iter().map(|(_, artifact)| artifact).collect())
}
