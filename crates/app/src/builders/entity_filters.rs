//! Entity and area selection: domain filtering, area resolution, ordering.

use std::collections::HashSet;

use roomboard_domain::area::Area;
use roomboard_domain::collate::locale_cmp;
use roomboard_domain::device::{Device, DeviceRegistry};
use roomboard_domain::entity::{Entity, in_domain};
use roomboard_domain::entity_domain::EntityDomainInfo;

/// Resolve the room an entity lives in.
///
/// The entity's own area wins; otherwise the area of its device, if the
/// device is known. Entities with neither are unassigned.
#[must_use]
pub fn get_entity_area_id<'a>(entity: &'a Entity, devices: &'a DeviceRegistry) -> Option<&'a str> {
    entity.area().or_else(|| {
        entity
            .device()
            .and_then(|device_id| devices.get(device_id))
            .and_then(Device::area)
    })
}

/// Keep entities in one of `domains` that are not in `excluded`, in input order.
pub fn filter_entities_by_domain_and_exclusions<'a, I>(
    entities: I,
    domains: &[EntityDomainInfo],
    excluded: &[String],
) -> Vec<&'a Entity>
where
    I: IntoIterator<Item = &'a Entity>,
{
    let excluded: HashSet<&str> = excluded.iter().map(String::as_str).collect();
    entities
        .into_iter()
        .filter(|entity| domains.iter().any(|domain| entity.in_domain(&domain.id)))
        .filter(|entity| !excluded.contains(entity.entity_id.as_str()))
        .collect()
}

/// Order entities by name (falling back to id); equal names keep input order.
#[must_use]
pub fn sort_entities_alphabetically<'a>(entities: &[&'a Entity]) -> Vec<&'a Entity> {
    let mut sorted = entities.to_vec();
    sorted.sort_by(|a, b| locale_cmp(a.sort_name(), b.sort_name()));
    sorted
}

#[must_use]
pub fn get_entities_by_domain<'a>(entities: &[&'a Entity], domain: &str) -> Vec<&'a Entity> {
    entities
        .iter()
        .copied()
        .filter(|entity| entity.in_domain(domain))
        .collect()
}

/// Entities of `domain` that resolve to `area_id`, in input order.
#[must_use]
pub fn get_area_domain_entities<'a>(
    entities: &[&'a Entity],
    area_id: &str,
    domain: &str,
    devices: &DeviceRegistry,
) -> Vec<&'a Entity> {
    entities
        .iter()
        .copied()
        .filter(|entity| {
            get_entity_area_id(entity, devices) == Some(area_id) && entity.in_domain(domain)
        })
        .collect()
}

/// Areas fit for display: not the reserved default area, a non-blank name,
/// and at least one entity resolving to them.
#[must_use]
pub fn filter_valid_areas<'a>(
    areas: &[&'a Area],
    entities: &[&Entity],
    devices: &DeviceRegistry,
) -> Vec<&'a Area> {
    areas
        .iter()
        .copied()
        .filter(|area| !area.is_default())
        .filter(|area| area.has_display_name())
        .filter(|area| {
            entities
                .iter()
                .any(|entity| get_entity_area_id(entity, devices) == Some(area.area_id.as_str()))
        })
        .collect()
}

/// Order areas by name; equal names keep input order.
#[must_use]
pub fn sort_areas_alphabetically<'a>(areas: &[&'a Area]) -> Vec<&'a Area> {
    let mut sorted = areas.to_vec();
    sorted.sort_by(|a, b| locale_cmp(&a.name, &b.name));
    sorted
}

/// Whether any id belongs to `domain`.
#[must_use]
pub fn has_domain<S: AsRef<str>>(entity_ids: &[S], domain: &str) -> bool {
    entity_ids.iter().any(|id| in_domain(id.as_ref(), domain))
}
