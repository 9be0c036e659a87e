//! Shared GitHub API response fixtures for the HTTP-mocked test suites.
//!
//! The JSON shapes mirror what the real host returns, which is what the
//! client deserializes.

#![allow(dead_code)]

use serde_json::{json, Value};

pub const OWNER: &str = "acme";
pub const REPO: &str = "widget";
pub const SHA: &str = "a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6e7f8a9b0";

pub fn ref_json(server: &str, ref_name: &str, object_type: &str, sha: &str) -> Value {
    json!({
        "ref": ref_name,
        "node_id": "MDM6UmVmMTIzNDU2Nzg5",
        "url": format!("{server}/repos/{OWNER}/{REPO}/git/refs/{ref_name}"),
        "object": {
            "type": object_type,
            "sha": sha,
            "url": format!("{server}/repos/{OWNER}/{REPO}/git/commits/{sha}")
        }
    })
}

pub fn tag_json(server: &str, name: &str, sha: &str) -> Value {
    json!({
        "name": name,
        "commit": {
            "sha": sha,
            "url": format!("{server}/repos/{OWNER}/{REPO}/commits/{sha}")
        },
        "zipball_url": format!("{server}/repos/{OWNER}/{REPO}/zipball/refs/tags/{name}"),
        "tarball_url": format!("{server}/repos/{OWNER}/{REPO}/tarball/refs/tags/{name}"),
        "node_id": "MDM6UmVmMTIzNDU2Nzg5"
    })
}

pub fn user_json(server: &str) -> Value {
    json!({
        "login": "hotfix-bot",
        "id": 1,
        "node_id": "MDQ6VXNlcjE=",
        "avatar_url": "https://avatars.example.com/u/1",
        "gravatar_id": "",
        "url": format!("{server}/users/hotfix-bot"),
        "html_url": "https://github.com/hotfix-bot",
        "followers_url": format!("{server}/users/hotfix-bot/followers"),
        "following_url": format!("{server}/users/hotfix-bot/following{{/other_user}}"),
        "gists_url": format!("{server}/users/hotfix-bot/gists{{/gist_id}}"),
        "starred_url": format!("{server}/users/hotfix-bot/starred{{/owner}}{{/repo}}"),
        "subscriptions_url": format!("{server}/users/hotfix-bot/subscriptions"),
        "organizations_url": format!("{server}/users/hotfix-bot/orgs"),
        "repos_url": format!("{server}/users/hotfix-bot/repos"),
        "events_url": format!("{server}/users/hotfix-bot/events{{/privacy}}"),
        "received_events_url": format!("{server}/users/hotfix-bot/received_events"),
        "type": "User",
        "site_admin": false
    })
}

pub fn issue_json(server: &str, number: u64, title: &str, body: &str) -> Value {
    json!({
        "id": 1001,
        "node_id": "MDU6SXNzdWUxMDAx",
        "url": format!("{server}/repos/{OWNER}/{REPO}/issues/{number}"),
        "repository_url": format!("{server}/repos/{OWNER}/{REPO}"),
        "labels_url": format!("{server}/repos/{OWNER}/{REPO}/issues/{number}/labels{{/name}}"),
        "comments_url": format!("{server}/repos/{OWNER}/{REPO}/issues/{number}/comments"),
        "events_url": format!("{server}/repos/{OWNER}/{REPO}/issues/{number}/events"),
        "html_url": format!("https://github.com/{OWNER}/{REPO}/issues/{number}"),
        "number": number,
        "state": "open",
        "state_reason": null,
        "title": title,
        "body": body,
        "user": user_json(server),
        "labels": [{
            "id": 2001,
            "node_id": "MDU6TGFiZWwyMDAx",
            "url": format!("{server}/repos/{OWNER}/{REPO}/labels/RC"),
            "name": "RC",
            "description": null,
            "color": "d73a4a",
            "default": false
        }],
        "assignee": null,
        "assignees": [],
        "milestone": null,
        "locked": false,
        "active_lock_reason": null,
        "comments": 0,
        "closed_at": null,
        "created_at": "2026-08-06T12:00:00Z",
        "updated_at": "2026-08-06T12:00:00Z",
        "closed_by": null,
        "author_association": "NONE"
    })
}
