use derive_new::new;
use fake::Fake;
use fake::faker::lorem::en::{Word, Words};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

/// Write `lines` joined by `\n` (no trailing separator) to `dir/name`
pub fn write_lines(dir: &Path, name: &str, lines: &[&str]) -> FileSpec {
    let file_spec = FileSpec::new(dir.join(name), lines.join("\n"));
    write_file(file_spec.clone());
    file_spec
}

/// Lines of random words, one sentence per line
pub fn generated_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|_| Words(2..6).fake::<Vec<String>>().join(" "))
        .collect()
}

pub fn generated_file_name() -> String {
    format!("{}.txt", Word().fake::<String>())
}
