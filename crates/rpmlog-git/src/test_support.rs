//! Helpers for building repositories in tests

use std::path::Path;

use git2::{Oid, Repository, Signature, Time};

/// Signature with a fixed commit time
pub(crate) fn signature_at(seconds: i64) -> Signature<'static> {
    Signature::new("Test Packager", "packager@example.com", &Time::new(seconds, 0)).unwrap()
}

/// Write `files` into the working tree and commit them on HEAD
pub(crate) fn commit_files(
    repo: &Repository,
    files: &[(&str, &str)],
    message: &str,
    seconds: i64,
) -> Oid {
    let workdir = repo.workdir().unwrap();
    let mut index = repo.index().unwrap();
    for (name, content) in files {
        std::fs::write(workdir.join(name), content).unwrap();
        index.add_path(Path::new(name)).unwrap();
    }
    index.write().unwrap();
    commit_index(repo, &mut index, message, seconds)
}

/// Delete `name` from the working tree and commit the removal on HEAD
pub(crate) fn remove_file(repo: &Repository, name: &str, message: &str, seconds: i64) -> Oid {
    let workdir = repo.workdir().unwrap();
    std::fs::remove_file(workdir.join(name)).unwrap();
    let mut index = repo.index().unwrap();
    index.remove_path(Path::new(name)).unwrap();
    index.write().unwrap();
    commit_index(repo, &mut index, message, seconds)
}

/// Commit on top of `parent` without moving HEAD
pub(crate) fn side_commit(repo: &Repository, parent: Oid, message: &str, seconds: i64) -> Oid {
    let sig = signature_at(seconds);
    let parent = repo.find_commit(parent).unwrap();
    let tree = parent.tree().unwrap();
    repo.commit(None, &sig, &sig, message, &tree, &[&parent])
        .unwrap()
}

/// Commit the current index on HEAD with a second parent
pub(crate) fn merge_commit(repo: &Repository, other: Oid, message: &str, seconds: i64) -> Oid {
    let sig = signature_at(seconds);
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    let other = repo.find_commit(other).unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[&head, &other])
        .unwrap()
}

fn commit_index(repo: &Repository, index: &mut git2::Index, message: &str, seconds: i64) -> Oid {
    let sig = signature_at(seconds);
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap()
}
