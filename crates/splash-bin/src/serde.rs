/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use splash_format::SplashRecord;

pub struct Metadata<'a> {
    file:    &'a Path,
    size:    usize,
    records: Vec<RecordMetadata>
}

impl<'a> Metadata<'a> {
    pub fn new(file: &'a Path, size: usize, records: &[SplashRecord]) -> Metadata<'a> {
        Metadata {
            file,
            size,
            records: records.iter().copied().map(RecordMetadata).collect()
        }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ContainerMetadata", 4)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("record_count", &self.records.len())?;
        state.serialize_field("records", &self.records)?;

        state.end()
    }
}

struct RecordMetadata(SplashRecord);

impl Serialize for RecordMetadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let record = &self.0;
        let mut state = serializer.serialize_struct("SplashRecord", 7)?;

        state.serialize_field("index", &record.index)?;
        state.serialize_field("offset", &record.offset)?;
        state.serialize_field("width", &record.header.width)?;
        state.serialize_field("height", &record.header.height)?;
        state.serialize_field("format", &record.header.format)?;
        state.serialize_field("sectors", &record.header.sectors)?;
        state.serialize_field("record_size", &record.header.record_size())?;

        state.end()
    }
}
