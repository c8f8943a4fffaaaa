use std::io::Cursor;

use pretty_assertions::assert_eq;
use techblog_cli::scenarios::{automation_tutorial, python_tutorial, quick_post, sample_post};
use techblog_cli::*;
use techblog_core::db::ConnectionSpec;
use techblog_core::{list_recent_posts, ConnectionMethods};
use techblog_test_helper::*;

fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn explicit_db_wins() {
    let dir = tempfile::tempdir().unwrap();
    ConnectionSpec::new("saved.db").save(dir.path()).unwrap();
    let spec = load_connspec(Some("flag.db"), dir.path()).unwrap();
    assert_eq!(spec.conn_str, "flag.db");
}

#[test]
fn saved_spec_used_without_flag() {
    let dir = tempfile::tempdir().unwrap();
    ConnectionSpec::new("saved.db").save(dir.path()).unwrap();
    let spec = load_connspec(None, dir.path()).unwrap();
    assert_eq!(spec.conn_str, "saved.db");
}

#[test]
fn default_spec_without_saved_one() {
    let dir = tempfile::tempdir().unwrap();
    let spec = load_connspec(None, &dir.path().join(".techblog")).unwrap();
    assert_eq!(spec, ConnectionSpec::default());
}

#[test]
fn init_creates_database_and_saves_spec() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("blog.db");
    let base = dir.path().join(".techblog");
    init(db_path.to_str().unwrap(), &base).unwrap();

    assert!(db_path.exists());
    let spec = load_connspec(None, &base).unwrap();
    assert_eq!(spec.conn_str, db_path.to_str().unwrap());
    let has_table = session(&spec, |conn| Ok(conn.has_table("post_topics")?)).unwrap();
    assert!(has_table);
}

#[test]
fn load_post_fills_missing_author() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("post.json");
    std::fs::write(
        &path,
        r#"{"title": "Hello", "excerpt": "First", "category": "Tech News"}"#,
    )
    .unwrap();
    let post = load_post(&path, AUTHOR_EMAIL).unwrap();
    assert_eq!(post.author_email, AUTHOR_EMAIL);
    assert!(post.sections.is_empty());
    assert_eq!(post.primary_language, "python");
}

#[test]
fn load_post_keeps_named_author() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("post.json");
    std::fs::write(
        &path,
        r#"{"title": "Hello", "excerpt": "First", "category": "Tech News",
            "author_email": "someone@techblog.test"}"#,
    )
    .unwrap();
    let post = load_post(&path, AUTHOR_EMAIL).unwrap();
    assert_eq!(post.author_email, "someone@techblog.test");
}

#[test]
fn load_post_rejects_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("post.json");
    std::fs::write(&path, r#"{"title": "no category"}"#).unwrap();
    let err = load_post(&path, AUTHOR_EMAIL).unwrap_err();
    assert!(err.to_string().starts_with("invalid post description"));
}

#[test]
fn add_from_file_stores_post() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("post.json");
    std::fs::write(
        &path,
        r#"{"title": "From A File", "excerpt": "e", "category_name": "Programming",
            "topics": ["Rust"],
            "content_sections": [{"type": "text", "text": "hello"}]}"#,
    )
    .unwrap();
    let mut conn = sqlite_connection();
    let id = add_from_file(&mut conn, &path, AUTHOR_EMAIL).unwrap();
    let recent = list_recent_posts(&conn, 1).unwrap();
    assert_eq!(recent[0].id, id);
    assert_eq!(recent[0].slug, "from-a-file");
    assert_eq!(conn.post_topics(id).unwrap(), vec!["Rust".to_string()]);
}

#[test]
fn add_from_file_unknown_author() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("post.json");
    std::fs::write(
        &path,
        r#"{"title": "Orphan", "excerpt": "e", "category": "Programming"}"#,
    )
    .unwrap();
    let mut conn = sqlite_connection();
    let err = add_from_file(&mut conn, &path, "ghost@techblog.test").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Author with email ghost@techblog.test not found"
    );
    assert_eq!(conn.row_count("post").unwrap(), 0);
}

#[test]
fn recent_listing() {
    let mut conn = sqlite_connection();
    let id = techblog_core::add_post(&mut conn, &quick_post(AUTHOR_EMAIL)).unwrap();
    let text = output(|out| write_recent(&conn, 5, out));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "Recent Posts (1):");
    assert_eq!(lines[2], "-".repeat(50));
    assert!(lines[3].starts_with(&format!("ID: {id} | Quick Test Post | Tech News | ")));
    assert_eq!(lines.len(), 4);
}

#[test]
fn stats_listing() {
    let conn = sqlite_connection();
    let text = output(|out| write_stats(&conn, out));
    assert_eq!(
        text,
        "author       1\ncategory     0\ntopic        0\npost         0\npost_topics  0\n"
    );
}

#[test]
fn show_post() {
    let mut conn = sqlite_connection();
    let id = techblog_core::add_post(&mut conn, &sample_post(AUTHOR_EMAIL)).unwrap();

    let text = output(|out| write_post(&conn, id, false, out));
    assert!(text.contains("Title: Sample Blog Post with Consistent Styling\n"));
    assert!(text.contains("Slug: sample-blog-post-with-consistent-styling\n"));
    assert!(text.contains("Read time: 7 min\n"));
    assert!(text.contains("Image: /static/images/posts/sample-post.png\n"));
    assert!(text.ends_with("Topics: Python, Database, Web Development\n"));

    let html = output(|out| write_post(&conn, id, true, out));
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<li>SEO-friendly slug generation</li>"));
}

#[test]
fn show_missing_post() {
    let conn = sqlite_connection();
    let mut out = Vec::new();
    let err = write_post(&conn, 7, false, &mut out).unwrap_err();
    assert_eq!(err.to_string(), "no post with ID 7");
}

#[test]
fn choices() {
    assert_eq!(Scenario::from_choice("1"), Scenario::SamplePosts);
    assert_eq!(Scenario::from_choice(" 2\n"), Scenario::QuickPost);
    assert_eq!(Scenario::from_choice("3"), Scenario::Basic);
    assert_eq!(Scenario::from_choice(""), Scenario::Basic);
    assert_eq!(Scenario::from_choice("anything"), Scenario::Basic);
}

#[test]
fn prompt_reads_choice() {
    let mut input = Cursor::new("2\n");
    let mut out = Vec::new();
    let scenario = prompt(&mut input, &mut out).unwrap();
    assert_eq!(scenario, Scenario::QuickPost);
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("TechBlog Post Creator\n"));
    assert!(text.ends_with("Enter choice (1-3): "));
}

#[test]
fn sample_posts_scenario() {
    let mut conn = sqlite_connection();
    let text = output(|out| run_scenario(&mut conn, Scenario::SamplePosts, AUTHOR_EMAIL, out));
    assert!(text.contains("Recent Posts (2):"));
    assert_eq!(conn.row_count("post").unwrap(), 2);
    assert_eq!(conn.row_count("category").unwrap(), 2);
    assert_eq!(conn.row_count("topic").unwrap(), 7);
    assert_eq!(conn.row_count("post_topics").unwrap(), 7);

    let recent = list_recent_posts(&conn, 2).unwrap();
    assert_eq!(recent[0].title, automation_tutorial(AUTHOR_EMAIL).title);
    assert_eq!(recent[1].title, python_tutorial(AUTHOR_EMAIL).title);
    let (automation, _) = techblog_core::get_post(&conn, recent[0].id)
        .unwrap()
        .unwrap();
    assert!(automation.content.contains("prism-yaml.min.js"));
    assert!(automation.content.contains("copyToClipboard(1)"));
}

#[test]
fn quick_post_scenario() {
    let mut conn = sqlite_connection();
    let text = output(|out| run_scenario(&mut conn, Scenario::QuickPost, AUTHOR_EMAIL, out));
    let recent = list_recent_posts(&conn, 1).unwrap();
    assert_eq!(text, format!("Added post {}\n", recent[0].id));
    assert_eq!(recent[0].category, "Tech News");
}

#[test]
fn basic_scenario_twice_reuses_topics() {
    let mut conn = sqlite_connection();
    output(|out| run_scenario(&mut conn, Scenario::Basic, AUTHOR_EMAIL, out));
    let text = output(|out| run_scenario(&mut conn, Scenario::Basic, AUTHOR_EMAIL, out));
    assert!(text.contains("Recent Posts (2):"));
    assert_eq!(conn.row_count("topic").unwrap(), 3);
    assert_eq!(conn.row_count("post_topics").unwrap(), 6);
}

#[test]
fn scenario_with_unknown_author_fails() {
    let mut conn = sqlite_connection();
    let mut out = Vec::new();
    let err = run_scenario(&mut conn, Scenario::QuickPost, DEFAULT_AUTHOR, &mut out).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Author with email {DEFAULT_AUTHOR} not found")
    );
    assert_eq!(conn.row_count("category").unwrap(), 0);
}

#[test]
fn session_on_file_database() {
    let (conn, spec, _dir) = sqlite_file_connection();
    conn.close().unwrap();
    let id = session(&spec, |conn| {
        Ok(techblog_core::add_post(conn, &quick_post(AUTHOR_EMAIL))?)
    })
    .unwrap();
    let listed = session(&spec, |conn| Ok(list_recent_posts(&*conn, 1)?)).unwrap();
    assert_eq!(listed[0].id, id);
}
