mod anchor_volume;
mod object_measurement;
