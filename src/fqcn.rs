//! Fully qualified class name (FQCN) helpers.
//!
//! FQCNs use `\` as the namespace separator (`App\Domain\Entity\User`).
//! Namespace and file path conversion assumes a PSR-4 style layout where a
//! base namespace maps onto a base directory.

use serde::Serialize;
use std::path::MAIN_SEPARATOR;

use crate::error::{Error, Result};

pub const NAMESPACE_SEPARATOR: char = '\\';

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainAndEntity {
    pub domain: String,
    pub entity: String,
}

/// Splits an FQCN into its domain (second segment) and entity (last segment).
///
/// `App\Customer\Domain\Entity\Address` gives `Customer` / `Address`; a two
/// segment name such as `App\User` gives `User` for both.
pub fn extract_domain_and_entity(fqcn: &str) -> Result<DomainAndEntity> {
    let parts: Vec<&str> = fqcn
        .trim_start_matches(NAMESPACE_SEPARATOR)
        .split(NAMESPACE_SEPARATOR)
        .collect();

    if parts.len() < 2 {
        return Err(Error::InvalidFqcn {
            fqcn: fqcn.to_string(),
        });
    }

    Ok(DomainAndEntity {
        domain: parts[1].to_string(),
        entity: parts[parts.len() - 1].to_string(),
    })
}

/// Last segment of an FQCN, optionally lowercased. Names without a separator
/// are returned as-is.
pub fn short_class_name(fqcn: &str, lowercase: bool) -> String {
    let trimmed = fqcn.trim_end_matches([NAMESPACE_SEPARATOR, '/']);
    let name = trimmed
        .rsplit([NAMESPACE_SEPARATOR, '/'])
        .next()
        .unwrap_or(trimmed);

    if lowercase {
        name.to_ascii_lowercase()
    } else {
        name.to_string()
    }
}

/// Everything before the last separator, or `""` for a class in the global
/// namespace.
pub fn extract_namespace(fqcn: &str) -> &str {
    let fqcn = fqcn.trim_start_matches(NAMESPACE_SEPARATOR);
    match fqcn.rfind(NAMESPACE_SEPARATOR) {
        Some(pos) => &fqcn[..pos],
        None => "",
    }
}

pub fn namespace_to_filepath(namespace: &str, base_namespace: &str, base_dir: &str) -> String {
    namespace_to_filepath_with(namespace, base_namespace, base_dir, MAIN_SEPARATOR)
}

/// Maps `namespace` onto a path under `base_dir`, joining with `separator`.
///
/// The `base_namespace` prefix is dropped when present; a namespace outside
/// of it is placed under `base_dir` whole. No file extension is added.
pub fn namespace_to_filepath_with(
    namespace: &str,
    base_namespace: &str,
    base_dir: &str,
    separator: char,
) -> String {
    let namespace = namespace.trim_matches(NAMESPACE_SEPARATOR);
    let base_namespace = base_namespace.trim_matches(NAMESPACE_SEPARATOR);

    let is_root = base_dir.strip_prefix(separator) == Some("");
    let base_dir = if is_root {
        base_dir
    } else {
        base_dir.trim_end_matches(separator)
    };

    if namespace == base_namespace || namespace.is_empty() {
        return base_dir.to_string();
    }

    let relative = if base_namespace.is_empty() {
        namespace
    } else {
        namespace
            .strip_prefix(base_namespace)
            .and_then(|rest| rest.strip_prefix(NAMESPACE_SEPARATOR))
            .unwrap_or(namespace)
    };
    let relative = relative.replace(NAMESPACE_SEPARATOR, &separator.to_string());

    if relative.is_empty() {
        return base_dir.to_string();
    }
    if is_root {
        return format!("{separator}{}", relative.trim_start_matches(separator));
    }
    if base_dir.is_empty() {
        return relative;
    }
    format!("{base_dir}{separator}{relative}")
}

/// Inverse of [`namespace_to_filepath`]. Accepts `/` and `\` in both the path
/// and `base_dir`. File extensions are kept as part of the last segment.
pub fn path_to_namespace(path: &str, base_namespace: &str, base_dir: &str) -> String {
    let path = path.replace(NAMESPACE_SEPARATOR, "/");
    let base_dir = base_dir.replace(NAMESPACE_SEPARATOR, "/");
    let base_dir = base_dir.trim_end_matches('/');

    let relative = if base_dir.is_empty() {
        path.strip_prefix('/').unwrap_or(&path)
    } else if let Some(rest) = path
        .strip_prefix(base_dir)
        .and_then(|rest| rest.strip_prefix('/'))
    {
        rest
    } else if path == base_dir {
        ""
    } else {
        &path
    };

    let relative = relative.replace('/', "\\");
    let base_namespace = base_namespace.trim_end_matches(NAMESPACE_SEPARATOR);

    if relative.is_empty() {
        return base_namespace.to_string();
    }
    if base_namespace.is_empty() {
        return relative;
    }
    format!("{base_namespace}{NAMESPACE_SEPARATOR}{relative}")
}
