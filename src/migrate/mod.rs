// Migration driver - full-corpus iteration with a fixed ordering/skip contract
//
// Two phases, always in this order: every rank becomes a target group, then
// every player becomes a target user. Nothing is caught mid-run; the first
// collaborator failure aborts the migration with prior writes committed.
// Single-threaded and synchronous throughout - the corpus is finite and
// already loaded, so there is nothing to pipeline.

pub mod progress;

use crate::error::MigrationError;
use crate::model::node::{Node, NodeBuilder};
use crate::source::SourceReader;
use crate::target::TargetWriter;
use crate::translate::{parse_node, standardize_name};
use progress::ProgressLog;
use serde::Serialize;

/// Progress lines are batched during the user phase: one line per this many
/// migrated users, instead of one per user.
const USER_PROGRESS_INTERVAL: usize = 500;

/// Counts reported after a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MigrationSummary {
    pub groups: usize,
    pub users: usize,
}

/// Drives one migration run over injected collaborators.
///
/// The reader and writer arrive already constructed; the driver never
/// discovers them from a host or registry.
pub struct Migrator<S, T, P> {
    source: S,
    target: T,
    progress: P,
}

impl<S, T, P> Migrator<S, T, P>
where
    S: SourceReader,
    T: TargetWriter,
    P: ProgressLog,
{
    pub fn new(source: S, target: T, progress: P) -> Self {
        Self {
            source,
            target,
            progress,
        }
    }

    /// Run the full migration: groups, then users, then the summary.
    pub fn run(&mut self) -> Result<MigrationSummary, MigrationError> {
        self.progress.log("Starting.");

        self.progress.log("Starting groups migration.");
        let groups = self.migrate_groups()?;
        self.progress.log(&format!("Migrated {groups} groups."));

        self.progress.log("Starting user migration.");
        let users = self.migrate_users()?;
        self.progress.log(&format!("Migrated {users} users."));

        self.progress.log("Success! Migration complete.");
        self.progress.log(
            "Don't forget to remove or disable the source permissions plugin and restart \
             the server. The target system may not take over as the permission handler \
             until this is done.",
        );

        Ok(MigrationSummary { groups, users })
    }

    fn migrate_groups(&mut self) -> Result<usize, MigrationError> {
        let mut count = 0usize;

        for rank in self.source.ranks()? {
            // Group creation uses the raw rank name; only cross-references
            // below go through standardize_name.
            let mut group = self.target.create_group(&rank.name)?;

            for entry in self.source.permissions(&rank) {
                if entry.name.is_empty() {
                    continue;
                }
                group.attach(parse_node(&entry.name, entry.value).build());
            }

            for parent in self.source.parents(&rank) {
                if parent.name.is_empty() {
                    continue;
                }
                group.attach(Node::inheritance(standardize_name(&parent.name)));
            }

            // Unconditional, even for empty prefix/suffix text. Decoration
            // priority is tied to the rank's weight, not insertion order.
            group.attach(Node::weight(rank.weight));
            group.attach(Node::prefix(rank.prefix.clone(), rank.weight));
            group.attach(Node::suffix(rank.suffix.clone(), rank.weight));

            self.target.save_group(group)?;
            count += 1;
            self.progress
                .log(&format!("Migrated {count} groups so far."));
        }

        Ok(count)
    }

    fn migrate_users(&mut self) -> Result<usize, MigrationError> {
        let mut count = 0usize;

        for player in self.source.players()? {
            // No UUID means the source never resolved this player; skip the
            // whole record without touching the target.
            let Some(uuid) = player.uuid else {
                continue;
            };

            let mut user = self.target.load_or_create_user(uuid)?;

            for assignment in &player.ranks {
                if assignment.name.is_empty() {
                    continue;
                }
                let mut builder = NodeBuilder::inheritance(standardize_name(&assignment.name));

                for (tag, value) in &assignment.tags {
                    // "all" marks a membership that applies everywhere, so
                    // it maps to no context at all rather than a literal one.
                    if tag.eq_ignore_ascii_case("all") {
                        continue;
                    }
                    builder = builder.with_context(tag, value);
                }

                user.attach(builder.build());
            }

            for tag in &player.usertags {
                let value = self.source.tag_value(&player, tag);
                user.attach(Node::meta(tag, value));
            }

            for entry in &player.permissions {
                if entry.name.is_empty() {
                    continue;
                }
                user.attach(parse_node(&entry.name, entry.value).build());
            }

            self.target.cleanup_user(&mut user);
            self.target.save_user(user)?;

            count += 1;
            if count % USER_PROGRESS_INTERVAL == 0 {
                self.progress.log(&format!("Migrated {count} users so far."));
            }
        }

        Ok(count)
    }
}
