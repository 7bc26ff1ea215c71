pub mod address_list;
