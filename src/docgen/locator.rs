//! Template lookup inside the nested templates tree.
//!
//! Templates are organized in category subfolders that moved around more
//! than once, so a request may name either `categoria/arquivo.docx` or just
//! `arquivo.docx`. The literal join is tried first; only when that misses
//! does the recursive search run.

use std::io;
use std::path::{Path, PathBuf};

/// Directory-listing capability the locator runs against.
///
/// Injected so the search stays a pure function; tests use an in-memory
/// tree instead of touching the real filesystem.
pub trait TemplateFs {
    fn existe(&self, caminho: &Path) -> bool;
    /// Immediate subdirectories of `caminho`, lexicographically sorted so a
    /// lookup is reproducible within a run.
    fn subdiretorios(&self, caminho: &Path) -> Vec<PathBuf>;
    fn ler(&self, caminho: &Path) -> io::Result<Vec<u8>>;
}

/// `TemplateFs` backed by `std::fs`.
pub struct RealTemplateFs;

impl TemplateFs for RealTemplateFs {
    fn existe(&self, caminho: &Path) -> bool {
        caminho.is_file()
    }

    fn subdiretorios(&self, caminho: &Path) -> Vec<PathBuf> {
        let entradas = match std::fs::read_dir(caminho) {
            Ok(entradas) => entradas,
            Err(e) => {
                log::debug!("cannot list {}: {}", caminho.display(), e);
                return Vec::new();
            }
        };
        let mut subs: Vec<PathBuf> = entradas
            .filter_map(|entrada| entrada.ok())
            .map(|entrada| entrada.path())
            .filter(|caminho| caminho.is_dir())
            .collect();
        subs.sort();
        subs
    }

    fn ler(&self, caminho: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(caminho)
    }
}

/// Locate `relativo` under `raiz`: literal join first, then depth-first
/// through every subdirectory. Returns `None` when no match exists anywhere
/// in the tree; a miss is the caller's per-document problem, never an error.
pub fn locate_template<F: TemplateFs>(fs: &F, raiz: &Path, relativo: &Path) -> Option<PathBuf> {
    let direto = raiz.join(relativo);
    if fs.existe(&direto) {
        return Some(direto);
    }
    for sub in fs.subdiretorios(raiz) {
        if let Some(achado) = locate_template(fs, &sub, relativo) {
            return Some(achado);
        }
    }
    None
}
