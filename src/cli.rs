//! Headless command line: open a document, run one command, save.

use crate::{default_document_path, Document, MemoryScene, Operator, SceneObject};
use anyhow::{anyhow, Context};
use glam::Vec3;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const USAGE: &str = "\
usage: latticekit [--doc PATH] <command> [args...]

operators:
  manage                        manage the selected meshes
  unmanage                      stop managing
  add-all                       add a lattice around every managed mesh
  add-selected                  add a lattice around the selected meshes
  toggle <lattice>              show or hide a lattice
  select <lattice>              select meshes bound to a lattice
  deselect <lattice>            deselect meshes bound to a lattice
  apply <lattice>               bake a lattice binding into its meshes
  delete <lattice>              remove a lattice binding from its meshes
  set-strength <lattice> <v>    set the strength of a lattice binding

scene:
  add-mesh <name> [x y z]       add a unit cube mesh
  pick <name>...                select exactly the named objects
  use-existing <lattice|off>    bind new meshes to an existing lattice
  groups                        list lattice bindings on the managed set";

/// One parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub document: Option<PathBuf>,
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Operator),
    AddMesh { name: String, location: Vec3 },
    Pick(Vec<String>),
    UseExisting(Option<String>),
    Groups,
    Help,
}

impl Invocation {
    pub fn parse<S: AsRef<str>>(args: &[S]) -> anyhow::Result<Self> {
        let mut args: Vec<&str> = args.iter().map(|a| a.as_ref()).collect();

        let mut document = None;
        if args.first() == Some(&"--doc") {
            let path = args.get(1).ok_or_else(|| anyhow!("--doc needs a path"))?;
            document = Some(PathBuf::from(*path));
            args.drain(..2);
        }

        let command = match args.as_slice() {
            [] | ["help"] | ["--help"] | ["-h"] => Command::Help,
            ["groups"] => Command::Groups,
            ["add-mesh", name] => Command::AddMesh {
                name: name.to_string(),
                location: Vec3::ZERO,
            },
            ["add-mesh", name, x, y, z] => Command::AddMesh {
                name: name.to_string(),
                location: Vec3::new(coord(x)?, coord(y)?, coord(z)?),
            },
            ["pick", names @ ..] => {
                Command::Pick(names.iter().map(|n| n.to_string()).collect())
            }
            ["use-existing", "off"] => Command::UseExisting(None),
            ["use-existing", name] => Command::UseExisting(Some(name.to_string())),
            _ => Command::Run(Operator::parse(args.as_slice())?),
        };
        Ok(Self { document, command })
    }
}

fn coord(value: &str) -> anyhow::Result<f32> {
    value
        .parse()
        .with_context(|| format!("invalid coordinate '{}'", value))
}

/// Parses `args`, runs the command against the document and saves it.
pub fn run<S: AsRef<str>>(args: &[S]) -> anyhow::Result<()> {
    let invocation = Invocation::parse(args)?;
    if invocation.command == Command::Help {
        println!("{}", USAGE);
        return Ok(());
    }

    let path = match invocation.document {
        Some(path) => path,
        None => default_document_path()
            .ok_or_else(|| anyhow!("no config directory; pass --doc PATH"))?,
    };
    let mut doc = open_or_create(&path)?;

    if execute(&mut doc, &invocation.command)? {
        doc.save(&path)
            .with_context(|| format!("failed to save {}", path.display()))?;
    }
    Ok(())
}

fn open_or_create(path: &Path) -> anyhow::Result<Document> {
    if path.exists() {
        Document::open(path).with_context(|| format!("failed to open {}", path.display()))
    } else {
        info!("{} does not exist, starting an empty document", path.display());
        Ok(Document::new(MemoryScene::new()))
    }
}

/// Runs one command. Returns whether the document changed.
pub fn execute(doc: &mut Document, command: &Command) -> anyhow::Result<bool> {
    match command {
        Command::Help => Ok(false),
        Command::Groups => {
            print_groups(doc);
            Ok(false)
        }
        Command::AddMesh { name, location } => {
            let name = doc
                .scene
                .add_object(SceneObject::mesh(name.as_str()).with_location(*location));
            info!("Added mesh '{}' at {:?}", name, location);
            Ok(true)
        }
        Command::Pick(names) => {
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            doc.scene.select_only(&names);
            Ok(true)
        }
        Command::UseExisting(lattice) => {
            doc.manager
                .set_existing_lattice(&doc.scene, lattice.as_deref())?;
            doc.manager.set_use_existing_lattice(lattice.is_some());
            Ok(true)
        }
        Command::Run(op) => {
            let report = doc.run(op);
            println!("{}", report);
            if report.is_finished() {
                print_groups(doc);
            } else {
                warn!("{} did not run", op.command());
            }
            Ok(report.is_finished())
        }
    }
}

fn print_groups(doc: &Document) {
    let groups = doc.groups();
    if groups.is_empty() {
        println!("no lattice bindings");
        return;
    }
    for group in &groups {
        println!(
            "{} -> {} [{}] strength {:.3}: {}",
            group.name,
            group.lattice_object,
            if group.visible { "shown" } else { "hidden" },
            group.strength(),
            group.object_names().collect::<Vec<_>>().join(", ")
        );
    }
}
