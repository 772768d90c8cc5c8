use std::fs;
use std::path::Path;

use crate::models::container_ps::ListContainerNamespaces;

/// Reads the namespace identifiers of `pid` from `<proc_root>/<pid>/ns`.
///
/// Each link reads like `net:[4026531992]`; the inode number is kept. Links
/// that cannot be read are left empty.
pub fn read_namespaces(proc_root: &Path, pid: i64) -> ListContainerNamespaces {
    let ns_dir = proc_root.join(pid.to_string()).join("ns");
    let read = |name: &str| read_namespace_id(&ns_dir.join(name));

    ListContainerNamespaces {
        mnt: read("mnt"),
        cgroup: read("cgroup"),
        ipc: read("ipc"),
        net: read("net"),
        pidns: read("pid"),
        uts: read("uts"),
        user: read("user"),
    }
}

fn read_namespace_id(link: &Path) -> Option<String> {
    let target = fs::read_link(link)
        .map_err(|e| tracing::debug!("Cannot read namespace link {}: {}", link.display(), e))
        .ok()?;
    parse_namespace_id(target.to_str()?)
}

fn parse_namespace_id(target: &str) -> Option<String> {
    let (_, rest) = target.split_once(":[")?;
    let inode = rest.strip_suffix(']')?;
    (!inode.is_empty()).then(|| inode.to_string())
}
