//! End-to-end tests of the transcript to minutes pipeline

use minutes::{apply_changes, extract_headers, normalize, to_markdown, LogLine};

use crate::helpers::{assert_in_order, load_fixture};

// ============================================================================
// Full Document Tests
// ============================================================================

#[test]
fn minimal_meeting_renders_in_order() {
    let md = to_markdown("https://example.org/irc", &load_fixture("minimal.txt"));

    assert_in_order(
        &md,
        &[
            "**Present:** alice",
            "## Content:",
            "* [1. Intro](#section1)",
            "* [2. Resolutions](#res)",
            "---",
            "### [1. Intro](id:section1)",
            "**alice:** hi",
            "Resolution #1: ship it",
            "### [2. Resolutions](id:res)",
            "* [Resolution #1: ship it](#resolution1)",
        ],
    );
}

#[test]
fn weekly_meeting_snapshot() {
    let md = to_markdown("https://example.org/irc", &load_fixture("weekly.txt"));

    insta::assert_snapshot!(md, @r###"
![W3C Logo](https://www.w3.org/Icons/w3c_home)

# Meeting: Weekly WG Call
**Date:** 01 March 2024

See also the [Agenda](https://example.org/agenda) and the [IRC Log](https://example.org/irc)

## Attendees
**Present:** alice, bob, carol

**Regrets:** erin

**Guests:** frank

**Chair:** bob

**Scribe(s):** alice

## Content:

* [1. Introductions](#section1)
    * [1.1. New members](#section2)
* [2. Publication](#section3)
* [3. AOB](#section4)
* [4. Resolutions](#res)

---

### [1. Introductions](id:section1)

**bob:** welcome everyone glad to see you all

> **carol:** thanks bob

#### [1.1. New members](id:section2)

**carol:** I joined last week

### [2. Publication](id:section3)

**bob:** we should publish the draft

> **Proposed resolution:** publish the draft as FPWD *(alice)*

> [**Resolution #1: publish the draft as FPWD**](id:resolution1)

### [3. AOB](id:section4)

> **dave:** see https://example.org/notes

### [4. Resolutions](id:res)

* [Resolution #1: publish the draft as FPWD](#resolution1)
"###);
}

#[test]
fn no_resolutions_means_no_resolutions_section() {
    let transcript = "\
10:00 <x> scribenick: alice
10:01 <alice> Topic: Only topic
10:02 <alice> bob: nothing decided
";
    let md = to_markdown("", transcript);

    assert!(md.contains("* [1. Only topic](#section1)"));
    assert!(!md.contains("Resolutions"));
    assert!(!md.contains("(#res)"));
}

#[test]
fn without_scribe_every_line_is_a_quote() {
    let transcript = "\
10:00 <alice> bob: hello
10:01 <bob> ... and more
";
    let md = to_markdown("", transcript);

    assert!(md.contains("> **alice:** bob: hello"));
    assert!(md.contains("> **bob:** ... and more"));
    assert!(md.contains("**Scribe(s):** \n"));
}

#[test]
fn empty_transcript_still_has_skeleton() {
    let md = to_markdown("ref", "");

    assert_in_order(&md, &["# Meeting: ", "[IRC Log](ref)", "## Content:", "---"]);
}

// ============================================================================
// Stage Property Tests
// ============================================================================

#[test]
fn normalization_drops_all_bot_nicks() {
    let raw = load_fixture("weekly.txt");
    let lines = normalize(&raw);

    assert!(lines.len() <= raw.lines().count());
    assert!(lines
        .iter()
        .all(|l| !l.is_from("RRSAgent") && !l.is_from("Zakim")));

    let (_, residual) = extract_headers(lines);
    assert!(residual.iter().all(|l| !l.is_from("trackbot")));
}

#[test]
fn one_shot_substitution_leaves_older_match() {
    let lines = vec![
        LogLine::new("a", "foo first"),
        LogLine::new("a", "X said foo"),
        LogLine::new("a", "s/foo/bar/"),
    ];

    let corrected = apply_changes(lines);

    assert_eq!(corrected[0].content, "foo first");
    assert_eq!(corrected[1].content, "X said bar");
    assert_eq!(corrected.len(), 2);
}

#[test]
fn pipe_delimited_substitution_in_full_pipeline() {
    let transcript = "\
10:00 <x> scribenick: alice
10:01 <alice> bob: path is a/b
10:02 <alice> s|a/b|c/d|
";
    let md = to_markdown("", transcript);

    assert!(md.contains("**bob:** path is c/d"));
    assert!(!md.contains("s|a/b"));
}

#[test]
fn malformed_substitution_is_plain_text() {
    let transcript = "10:00 <bob> s/only-one-part\n";
    let md = to_markdown("", transcript);

    assert!(md.contains("> **bob:** s/only-one-part"));
}
