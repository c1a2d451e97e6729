mod adding_revisions_groups_them_by_repository;
mod duplicate_revision_keeps_first_author;
mod empty_session_shows_placeholder;
mod expand_lists_changed_paths;
mod inspect_prints_row_details;
mod invalid_lines_are_reported_and_skipped;
mod message_width_flag_cuts_labels;
mod open_diff_of_changed_paths;
mod removing_last_revision_removes_repository;
mod script_file_is_read_instead_of_stdin;
