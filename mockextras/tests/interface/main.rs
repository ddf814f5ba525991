mod call_list;
mod stub;
