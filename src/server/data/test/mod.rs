mod airport;
mod city;
mod enrollment;
mod flight;
mod group;
mod passenger;
mod user;
