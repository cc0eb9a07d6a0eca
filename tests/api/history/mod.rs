mod best;
mod spots_time;
