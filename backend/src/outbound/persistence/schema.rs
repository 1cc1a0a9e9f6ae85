//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations`. Regenerate with `diesel print-schema`
//! after changing a migration.

diesel::table! {
    /// Submitted feedback records.
    ///
    /// `category` and `content` carry `CHECK` constraints mirroring the domain
    /// validation rules.
    feedbacks (id) {
        /// Primary key from the `feedbacks_id_seq` sequence.
        id -> Int8,
        /// One of `que_bom`, `que_pena`, `que_tal`.
        category -> Varchar,
        /// Trimmed text, 10 to 1000 characters.
        content -> Text,
        /// Insertion timestamp set by the database.
        created_at -> Timestamptz,
    }
}
