//! End-to-end scans of fixture projects on disk

use std::fs;
use std::path::Path;

use scenemap::scan::PROJECT_MARKER;
use scenemap::{scan_project, scan_to_string, ScanOptions, DEFAULT_OUTPUT};
use tempfile::{tempdir, TempDir};

fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(PROJECT_MARKER), "config_version=4\n").unwrap();
    for (path, contents) in files {
        let full = dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, contents).unwrap();
    }
    dir
}

fn diagram_lines(diagram: &str) -> Vec<&str> {
    diagram.lines().collect()
}

#[test]
fn test_player_scene_with_script() {
    let script = "extends KinematicBody2D\n\nvar Health = 100\n\nfunc Attack():\n\tpass\n";
    let dir = project(&[
        ("player.gd", script),
        (
            "Player.tscn",
            "[gd_scene load_steps=2 format=2]\n\n[ext_resource path=\"res://player.gd\" type=\"Script\" id=1]\n\n[node name=\"Player\" type=\"KinematicBody2D\"]\nscript = ExtResource( 1 )\n",
        ),
    ]);

    let (diagram, stats) = scan_to_string(dir.path(), dir.path()).unwrap();

    assert_eq!(
        diagram_lines(&diagram),
        vec![
            "classDiagram",
            "\tclass Player",
            "\tPlayer: +Health",
            "\tPlayer: +Attack()",
        ]
    );
    assert_eq!(stats.scenes, 1);
    assert_eq!(stats.lines_of_code, script.split('\n').count());
}

#[test]
fn test_world_embeds_enemy() {
    let dir = project(&[(
        "World.tscn",
        "[gd_scene format=2]\n[ext_resource path=\"res://Enemy.tscn\" type=\"PackedScene\" id=1]\n",
    )]);

    let (diagram, stats) = scan_to_string(dir.path(), dir.path()).unwrap();

    assert_eq!(
        diagram_lines(&diagram),
        vec!["classDiagram", "\tclass World", "\tWorld <|-- Enemy"]
    );
    assert_eq!(stats.scenes, 1);
    assert_eq!(stats.lines_of_code, 0);
}

#[test]
fn test_scripts_resolved_against_project_root() {
    let dir = project(&[
        ("scripts/hud.gd", "func Show():\n"),
        (
            "ui/Hud.tscn",
            "[ext_resource type=\"Script\" uid=\"uid://c4\" path=\"res://scripts/hud.gd\" id=\"1_h\"]\n",
        ),
    ]);

    // Scanning a subdirectory still resolves `res://` paths from the project root
    let (diagram, stats) = scan_to_string(dir.path().join("ui"), dir.path()).unwrap();

    assert!(diagram.contains("\tHud: +Show()\n"));
    assert_eq!(stats.lines_of_code, 2);
}

#[test]
fn test_every_script_counted_first_script_used() {
    let dir = project(&[
        ("a.gd", "var First = 1\n"),
        ("b.gd", "var Second = 2\nvar Third = 3\n"),
        (
            "Multi.tscn",
            "[ext_resource path=\"res://a.gd\" type=\"Script\" id=1]\n[ext_resource path=\"res://b.gd\" type=\"Script\" id=2]\n",
        ),
    ]);

    let (diagram, stats) = scan_to_string(dir.path(), dir.path()).unwrap();

    assert!(diagram.contains("Multi: +First"));
    assert!(!diagram.contains("Second"));
    assert_eq!(stats.lines_of_code, 2 + 3);
    assert_eq!(stats.script_references, 2);
}

#[test]
fn test_missing_script_is_not_fatal() {
    let dir = project(&[(
        "Ghost.tscn",
        "[ext_resource path=\"res://nowhere.gd\" type=\"Script\" id=1]\n",
    )]);

    let (diagram, stats) = scan_to_string(dir.path(), dir.path()).unwrap();

    assert_eq!(diagram_lines(&diagram), vec!["classDiagram", "\tclass Ghost"]);
    assert_eq!(stats.scenes, 1);
    assert_eq!(stats.unreadable_scripts, 1);
}

#[cfg(unix)]
#[test]
fn test_unreadable_scene_skipped() {
    let dir = project(&[("Good.tscn", "[gd_scene]\n")]);
    // Dangling link: listed by the walk, fails to open
    std::os::unix::fs::symlink(dir.path().join("gone.tscn"), dir.path().join("Bad.tscn")).unwrap();

    let (diagram, stats) = scan_to_string(dir.path(), dir.path()).unwrap();

    assert!(diagram.contains("\tclass Good\n"));
    assert!(!diagram.contains("Bad"));
    assert_eq!(stats.scenes, 1);
    assert_eq!(stats.skipped_scenes, 1);
}

#[test]
fn test_non_utf8_script_still_contributes() {
    let dir = project(&[(
        "Player.tscn",
        "[ext_resource path=\"res://player.gd\" type=\"Script\" id=1]\n",
    )]);
    fs::write(
        dir.path().join("player.gd"),
        b"# caf\xe9\nvar Health = 100\nfunc Attack():\n",
    )
    .unwrap();

    let (diagram, stats) = scan_to_string(dir.path(), dir.path()).unwrap();

    assert_eq!(
        diagram_lines(&diagram),
        vec![
            "classDiagram",
            "\tclass Player",
            "\tPlayer: +Health",
            "\tPlayer: +Attack()",
        ]
    );
    assert_eq!(stats.lines_of_code, 4);
    assert_eq!(stats.unreadable_scripts, 0);
}

#[test]
fn test_non_utf8_scene_still_scanned() {
    let dir = project(&[]);
    let mut scene = b"; d\xe9cor\n".to_vec();
    scene.extend_from_slice(b"[ext_resource path=\"res://Tree.tscn\" type=\"PackedScene\" id=1]\n");
    fs::write(dir.path().join("Forest.tscn"), scene).unwrap();

    let (diagram, stats) = scan_to_string(dir.path(), dir.path()).unwrap();

    assert!(diagram.contains("\tclass Forest\n"));
    assert!(diagram.contains("\tForest <|-- Tree\n"));
    assert_eq!(stats.scenes, 1);
    assert_eq!(stats.skipped_scenes, 0);
}

#[test]
fn test_nested_directories_all_scanned() {
    let dir = project(&[
        ("Main.tscn", ""),
        ("levels/level-one.tscn", ""),
        ("levels/deep/boss_room.tscn", ""),
        ("levels/deep/notes.txt", "not a scene"),
    ]);

    let (diagram, stats) = scan_to_string(dir.path(), dir.path()).unwrap();

    assert_eq!(stats.scenes, 3);
    for class in ["\tclass Main\n", "\tclass LevelOne\n", "\tclass Boss_room\n"] {
        assert!(diagram.contains(class), "missing {:?} in {}", class, diagram);
    }
}

#[test]
fn test_scan_project_discovers_root_from_subdirectory() {
    let dir = project(&[
        ("actor.gd", "var Speed = 3\n"),
        (
            "scenes/Actor.tscn",
            "[ext_resource path=\"res://actor.gd\" type=\"Script\" id=1]\n",
        ),
    ]);
    let scan_root = dir.path().join("scenes");

    let options = ScanOptions::discover(&scan_root).unwrap();
    assert_eq!(options.project_root, dir.path());

    let stats = scan_project(&options).unwrap();
    let diagram = fs::read_to_string(scan_root.join(DEFAULT_OUTPUT)).unwrap();

    assert_eq!(stats.scenes, 1);
    assert_eq!(
        diagram_lines(&diagram),
        vec!["classDiagram", "\tclass Actor", "\tActor: +Speed"]
    );
}

#[test]
fn test_rescan_overwrites_output() {
    let dir = project(&[("One.tscn", "")]);
    let options = ScanOptions::discover(dir.path()).unwrap();

    scan_project(&options).unwrap();
    scan_project(&options).unwrap();

    let diagram = fs::read_to_string(Path::new(&options.output)).unwrap();
    assert_eq!(diagram.matches("classDiagram").count(), 1);
    assert_eq!(diagram.matches("\tclass One\n").count(), 1);
}
