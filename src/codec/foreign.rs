//! Foreign member preservation
//!
//! RFC 7946 §6.1 allows any GeoJSON object to carry members beyond its
//! schema. Containers implementing [`ForeignMemberContainer`] keep such
//! members verbatim, but only when the caller opts in through
//! [`CodingOptions::include_foreign_members`]. Unknown members are never
//! a decode error either way.

use crate::{codec::CodingOptions, model::JsonObject};

/// A GeoJSON object that can hold foreign members
pub trait ForeignMemberContainer {
    /// Whether `key` is part of the container's own schema
    ///
    /// The discriminator key is always well known.
    fn is_well_known(key: &str) -> bool;

    fn foreign_members(&self) -> &JsonObject;

    fn foreign_members_mut(&mut self) -> &mut JsonObject;

    /// Collects every member of `object` that is not well known
    ///
    /// Does nothing unless foreign member coding is enabled.
    fn decode_foreign_members(&mut self, object: &JsonObject, options: &CodingOptions) {
        if !options.includes_foreign_members() {
            return;
        }

        let members = self.foreign_members_mut();
        for (key, value) in object {
            if !Self::is_well_known(key) {
                members.insert(key.clone(), value.clone());
            }
        }
    }

    /// Writes the stored foreign members into `object`
    ///
    /// Entries named like a well-known member are dropped so they cannot
    /// overwrite the container's own structure. Does nothing unless foreign
    /// member coding is enabled.
    fn encode_foreign_members(&self, object: &mut JsonObject, options: &CodingOptions) {
        if !options.includes_foreign_members() {
            return;
        }

        for (key, value) in self.foreign_members() {
            if Self::is_well_known(key) {
                tracing::debug!(
                    key = %key,
                    "dropping foreign member that shadows a well-known member"
                );
                continue;
            }
            object.insert(key.clone(), value.clone());
        }
    }
}
