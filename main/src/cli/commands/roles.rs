use clap::Parser;
use portal_core::Role;

#[derive(Parser)]
pub(crate) struct RolesArgs {}

impl RolesArgs {
    pub(crate) fn roles(&self) {
        for role in Role::all() {
            println!("{}\t{}\t{}", role.id(), role.slug(), role.display_name());
        }
    }
}
